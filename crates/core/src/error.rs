//! Error types shared across the drafting core.

use thiserror::Error;

use crate::catalog::{Category, Expansion};
use crate::rules::Difficulty;

/// Invalid or unmapped session configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The session name was blank.
    #[error("session name must not be empty")]
    EmptyName,
    /// Player count could not be parsed or fell outside the supported range.
    #[error("player count '{0}' is not between 2 and 7")]
    InvalidPlayers(String),
    /// Difficulty string did not match a known level.
    #[error("unknown difficulty '{0}' (expected easy, medium or hard)")]
    UnknownDifficulty(String),
    /// Expansion key or menu index did not match a known expansion.
    #[error("unknown expansion '{0}'")]
    UnknownExpansion(String),
    /// No expansion was selected for play.
    #[error("at least one expansion must be selected")]
    NoExpansions,
    /// The quota table has no setup entry for this combination.
    #[error("no setup quota for {players} players on {difficulty}")]
    MissingSetupQuota {
        /// Player count used for the lookup.
        players: u8,
        /// Difficulty used for the lookup.
        difficulty: Difficulty,
    },
    /// The quota table has no vision entry for this player count.
    #[error("no vision quota for {0} players")]
    MissingVisionQuota(u8),
    /// The quota table has no clairvoyance entry for this player count.
    #[error("no clairvoyance value for {0} players")]
    MissingClairvoyance(u8),
    /// Application settings could not be loaded.
    #[error("failed to load settings: {0}")]
    Settings(#[from] ::config::ConfigError),
}

/// Failure to assemble a card pool from the catalog.
#[derive(Debug, Error)]
pub enum PoolError {
    /// A selected expansion has no entry in the catalog at all.
    #[error("expansion {0} is missing from the catalog")]
    MissingExpansion(Expansion),
    /// A catalog identifier is blank or is not a plain file name.
    #[error("expansion {expansion} has a malformed identifier '{card}' in {category}")]
    MalformedEntry {
        /// Expansion carrying the bad entry.
        expansion: Expansion,
        /// Category of the bad entry.
        category: Category,
        /// The offending identifier.
        card: String,
    },
    /// The selected expansions contribute no cards to this category.
    #[error("no {0} available in the selected expansions")]
    EmptyCatalog(Category),
}

/// Failure while mutating a hand.
#[derive(Debug, Error)]
pub enum HandError {
    /// Discard requested for a card that is not currently held.
    #[error("card '{card}' is not held in {category}")]
    NotHeld {
        /// Category of the hand.
        category: Category,
        /// Identifier that was requested.
        card: String,
    },
    /// Backing pool could not be (re)generated.
    #[error(transparent)]
    Pool(#[from] PoolError),
}
