use std::fmt;

use chrono::{DateTime, Utc};

use crate::{
    catalog::Expansion,
    error::ConfigError,
    rules::{Difficulty, QuotaTable},
};

/// Validated configuration for one drafting session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    name: String,
    players: u8,
    difficulty: Difficulty,
    expansions: Vec<Expansion>,
    setup_cards: usize,
    vision_cards: usize,
    clairvoyance: u32,
    created_at: DateTime<Utc>,
}

impl SessionConfig {
    /// Validate the answers and derive quotas from the standard rules.
    pub fn new(
        name: impl Into<String>,
        players: u8,
        difficulty: Difficulty,
        expansions: impl IntoIterator<Item = Expansion>,
    ) -> Result<Self, ConfigError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ConfigError::EmptyName);
        }

        // Selection order is kept for pool assembly; repeats collapse.
        let mut selected: Vec<Expansion> = Vec::new();
        for expansion in expansions {
            if !selected.contains(&expansion) {
                selected.push(expansion);
            }
        }
        if selected.is_empty() {
            return Err(ConfigError::NoExpansions);
        }

        let table = QuotaTable::standard();
        let setup_cards = table.setup_quota(players, difficulty)?;
        let vision_cards = table.vision_quota(players)?;
        let clairvoyance = table.clairvoyance(players)?;

        Ok(Self {
            name,
            players,
            difficulty,
            expansions: selected,
            setup_cards,
            vision_cards,
            clairvoyance,
            created_at: Utc::now(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn players(&self) -> u8 {
        self.players
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Selected expansions in the order they were chosen.
    pub fn expansions(&self) -> &[Expansion] {
        &self.expansions
    }

    /// Cards laid out per setup category (characters, locations, objects).
    pub fn setup_cards(&self) -> usize {
        self.setup_cards
    }

    /// Size of the ghost's vision hand.
    pub fn vision_cards(&self) -> usize {
        self.vision_cards
    }

    pub fn clairvoyance(&self) -> u32 {
        self.clairvoyance
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl fmt::Display for SessionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sets = self
            .expansions
            .iter()
            .map(|expansion| expansion.display_name())
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(f, "Game: {}", self.name)?;
        writeln!(f, "Number of Players: {}", self.players)?;
        writeln!(f, "Difficulty: {}", self.difficulty)?;
        writeln!(f, "Sets Included: {sets}")?;
        writeln!(f, "Number of Displayed Cards: {}", self.setup_cards)?;
        writeln!(f, "Total Ghost Cards in Hand: {}", self.vision_cards)?;
        write!(f, "Clairvoyance Track: {}", self.clairvoyance)
    }
}
