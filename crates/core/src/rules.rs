//! Set-up rules: card quotas by player count and difficulty.

use std::{collections::BTreeMap, fmt, str::FromStr};

use once_cell::sync::Lazy;

use crate::error::ConfigError;

/// Smallest supported table.
pub const MIN_PLAYERS: u8 = 2;
/// Largest supported table.
pub const MAX_PLAYERS: u8 = 7;

/// Difficulty level chosen at set-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Difficulty {
    /// Fewest suspects on the table.
    Easy,
    /// Standard game.
    Medium,
    /// Most suspects on the table.
    Hard,
}

impl Difficulty {
    /// Lowercase label as typed at the prompt.
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ConfigError::UnknownDifficulty(s.trim().to_string())),
        }
    }
}

/// Parse a player count typed at the prompt ("2" through "7").
pub fn parse_players(raw: &str) -> Result<u8, ConfigError> {
    let trimmed = raw.trim();
    trimmed
        .parse::<u8>()
        .ok()
        .filter(|players| (MIN_PLAYERS..=MAX_PLAYERS).contains(players))
        .ok_or_else(|| ConfigError::InvalidPlayers(trimmed.to_string()))
}

/// Lookup tables for the set-up rules.
#[derive(Debug, Clone)]
pub struct QuotaTable {
    setup: BTreeMap<Difficulty, BTreeMap<u8, usize>>,
    visions: BTreeMap<u8, usize>,
    clairvoyance: BTreeMap<u8, u32>,
}

static STANDARD: Lazy<QuotaTable> = Lazy::new(QuotaTable::build_standard);

impl QuotaTable {
    /// The published rules.
    pub fn standard() -> &'static QuotaTable {
        &STANDARD
    }

    /// Number of character, location and object cards laid out per category.
    pub fn setup_quota(&self, players: u8, difficulty: Difficulty) -> Result<usize, ConfigError> {
        self.setup
            .get(&difficulty)
            .and_then(|by_players| by_players.get(&players))
            .copied()
            .ok_or(ConfigError::MissingSetupQuota {
                players,
                difficulty,
            })
    }

    /// Size of the ghost's vision hand.
    pub fn vision_quota(&self, players: u8) -> Result<usize, ConfigError> {
        self.visions
            .get(&players)
            .copied()
            .ok_or(ConfigError::MissingVisionQuota(players))
    }

    /// Clairvoyance track value for the player count.
    pub fn clairvoyance(&self, players: u8) -> Result<u32, ConfigError> {
        self.clairvoyance
            .get(&players)
            .copied()
            .ok_or(ConfigError::MissingClairvoyance(players))
    }

    fn build_standard() -> Self {
        let players = MIN_PLAYERS..=MAX_PLAYERS;
        let row = |values: [usize; 6]| players.clone().zip(values).collect::<BTreeMap<_, _>>();

        let setup = BTreeMap::from([
            (Difficulty::Easy, row([4, 5, 5, 6, 6, 7])),
            (Difficulty::Medium, row([5, 6, 6, 7, 8, 8])),
            (Difficulty::Hard, row([6, 7, 7, 8, 8, 9])),
        ]);
        let visions = row([7; 6]);
        let clairvoyance = players.clone().zip([0, 0, 4, 4, 6, 6]).collect();

        Self {
            setup,
            visions,
            clairvoyance,
        }
    }
}
