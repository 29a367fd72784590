//! Static card catalog keyed by expansion and category.

use std::{collections::BTreeMap, fmt, fs, path::Path, sync::Arc};

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Content module contributing cards to one or more categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Expansion {
    /// The core box.
    #[serde(rename = "BASE_SET")]
    Base,
    /// Hidden Signs.
    #[serde(rename = "HIDDEN_SIGNS")]
    HiddenSigns,
    /// Secrets and Lies.
    #[serde(rename = "SECRETS_AND_LIES")]
    SecretsAndLies,
    /// Hidden Motives.
    #[serde(rename = "HIDDEN_MOTIVES")]
    HiddenMotives,
}

impl Expansion {
    /// Menu order used by the selection prompt.
    pub const ALL: [Expansion; 4] = [
        Expansion::Base,
        Expansion::HiddenSigns,
        Expansion::SecretsAndLies,
        Expansion::HiddenMotives,
    ];

    /// Human readable title.
    pub fn display_name(self) -> &'static str {
        match self {
            Expansion::Base => "Base",
            Expansion::HiddenSigns => "Hidden Signs",
            Expansion::SecretsAndLies => "Secrets and Lies",
            Expansion::HiddenMotives => "Hidden Motives",
        }
    }

    /// Catalog key, matching the JSON catalog format.
    pub fn key(self) -> &'static str {
        match self {
            Expansion::Base => "BASE_SET",
            Expansion::HiddenSigns => "HIDDEN_SIGNS",
            Expansion::SecretsAndLies => "SECRETS_AND_LIES",
            Expansion::HiddenMotives => "HIDDEN_MOTIVES",
        }
    }

    /// Look up an expansion by its position in [`Expansion::ALL`].
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for Expansion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Kind of card; each identifier belongs to exactly one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Suspect cards.
    #[serde(rename = "character_cards")]
    Characters,
    /// Crime-scene cards.
    #[serde(rename = "location_cards")]
    Locations,
    /// Weapon cards.
    #[serde(rename = "object_cards")]
    Objects,
    /// Epilogue story cards.
    #[serde(rename = "story_cards")]
    Story,
    /// Ghost vision cards.
    #[serde(rename = "vision_cards")]
    Visions,
    /// Motive cards.
    #[serde(rename = "motive_cards")]
    Motives,
}

impl Category {
    /// Card-type tag, also used as the directory name for card images.
    pub fn card_type(self) -> &'static str {
        match self {
            Category::Characters => "character_cards",
            Category::Locations => "location_cards",
            Category::Objects => "object_cards",
            Category::Story => "story_cards",
            Category::Visions => "vision_cards",
            Category::Motives => "motive_cards",
        }
    }

    /// Title used when listing a hand of this category.
    pub fn hand_name(self) -> &'static str {
        match self {
            Category::Characters => "Character Cards",
            Category::Locations => "Location Cards",
            Category::Objects => "Object Cards",
            Category::Story => "Story Cards",
            Category::Visions => "Vision Cards",
            Category::Motives => "Motive Cards",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.card_type())
    }
}

/// Immutable mapping of expansion → category → ordered card identifiers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: BTreeMap<Expansion, BTreeMap<Category, Vec<String>>>,
}

static STANDARD: Lazy<Arc<Catalog>> = Lazy::new(|| Arc::new(Catalog::build_standard()));

impl Catalog {
    /// Shared handle to the built-in catalog.
    pub fn standard() -> Arc<Catalog> {
        Arc::clone(&STANDARD)
    }

    /// Parse a catalog from its JSON representation.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).context("failed to parse card catalog")
    }

    /// Load a catalog from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog {}", path.display()))?;
        Self::from_json_str(&content)
            .with_context(|| format!("failed to parse catalog {}", path.display()))
    }

    /// Whether the catalog has any entry for `expansion`.
    pub fn contains(&self, expansion: Expansion) -> bool {
        self.entries.contains_key(&expansion)
    }

    /// Categories contributed by `expansion`, if it is catalogued.
    pub fn categories(&self, expansion: Expansion) -> Option<&BTreeMap<Category, Vec<String>>> {
        self.entries.get(&expansion)
    }

    /// Identifiers for one expansion/category pair.
    pub fn cards(&self, expansion: Expansion, category: Category) -> Option<&[String]> {
        self.entries
            .get(&expansion)
            .and_then(|categories| categories.get(&category))
            .map(Vec::as_slice)
    }

    /// Register or replace the identifiers for one expansion/category pair.
    pub fn insert<I, S>(&mut self, expansion: Expansion, category: Category, cards: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries
            .entry(expansion)
            .or_default()
            .insert(category, cards.into_iter().map(Into::into).collect());
    }

    fn build_standard() -> Self {
        let mut catalog = Catalog::default();

        catalog.insert(Expansion::Base, Category::Characters, numbered("", 1..=18));
        catalog.insert(Expansion::Base, Category::Locations, numbered("", 19..=36));
        catalog.insert(Expansion::Base, Category::Objects, numbered("", 37..=54));
        catalog.insert(Expansion::Base, Category::Visions, numbered("", 1..=84));

        catalog.insert(Expansion::HiddenSigns, Category::Characters, numbered("HS", 1..=6));
        catalog.insert(Expansion::HiddenSigns, Category::Locations, numbered("HS", 7..=12));
        catalog.insert(Expansion::HiddenSigns, Category::Objects, numbered("HS", 13..=18));
        catalog.insert(Expansion::HiddenSigns, Category::Visions, numbered("HS", 1..=42));

        catalog.insert(Expansion::SecretsAndLies, Category::Characters, numbered("SL", 1..=6));
        catalog.insert(Expansion::SecretsAndLies, Category::Locations, numbered("SL", 7..=12));
        catalog.insert(Expansion::SecretsAndLies, Category::Objects, numbered("SL", 13..=18));
        catalog.insert(Expansion::SecretsAndLies, Category::Story, numbered("SL", 19..=36));
        catalog.insert(Expansion::SecretsAndLies, Category::Visions, numbered("SL", 1..=42));

        catalog.insert(
            Expansion::HiddenMotives,
            Category::Motives,
            [
                "Hearth and Home",
                "Honor",
                "Love",
                "Lunacy",
                "Marriage",
                "Sex",
                "Wealth",
            ],
        );

        catalog
    }
}

fn numbered(prefix: &str, range: std::ops::RangeInclusive<u32>) -> Vec<String> {
    range.map(|number| format!("{prefix}{number}")).collect()
}
