use std::{collections::BTreeMap, io::Write, sync::Arc};

use anyhow::{anyhow, Context, Result};
use tracing::info;

use crate::{
    catalog::{Catalog, Category},
    materialize::CardSink,
    rng::DrawRng,
};

use super::{
    command::{Command, Flow},
    hand::Hand,
    pool::CardPool,
    settings::SessionConfig,
};

/// Categories dealt at set-up, in folder creation order.
pub const SESSION_CATEGORIES: [Category; 4] = [
    Category::Characters,
    Category::Locations,
    Category::Objects,
    Category::Visions,
];

#[derive(Debug)]
struct Table {
    pool: CardPool,
    hand: Hand,
}

/// Owns one pool and hand per category and keeps the sink in step with them.
pub struct SessionManager<S> {
    config: SessionConfig,
    tables: BTreeMap<Category, Table>,
    rng: DrawRng,
    sink: S,
}

impl<S: CardSink> SessionManager<S> {
    /// Build every pool and deal every hand for the session.
    pub fn new(
        config: SessionConfig,
        catalog: Arc<Catalog>,
        mut rng: DrawRng,
        sink: S,
    ) -> Result<Self> {
        let mut tables = BTreeMap::new();
        for category in SESSION_CATEGORIES {
            let limit = match category {
                Category::Visions => config.vision_cards(),
                _ => config.setup_cards(),
            };
            let mut pool = CardPool::new(category, Arc::clone(&catalog), config.expansions())
                .with_context(|| format!("failed to build {category} pool"))?;
            let hand = Hand::dealt(&mut pool, limit, &mut rng)
                .with_context(|| format!("failed to deal {category}"))?;
            tables.insert(category, Table { pool, hand });
        }

        info!(
            "dealt session '{}' ({} players, {}) with seed {}",
            config.name(),
            config.players(),
            config.difficulty(),
            rng.seed()
        );

        Ok(Self {
            config,
            tables,
            rng,
            sink,
        })
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Seed of the draw source, for reproducing this session.
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn hand(&self, category: Category) -> Option<&Hand> {
        self.tables.get(&category).map(|table| &table.hand)
    }

    pub fn pool(&self, category: Category) -> Option<&CardPool> {
        self.tables.get(&category).map(|table| &table.pool)
    }

    /// All dealt hands in category order.
    pub fn hands(&self) -> impl Iterator<Item = &Hand> {
        self.tables.values().map(|table| &table.hand)
    }

    /// Create the session folders and write out every dealt hand.
    pub fn setup(&self) -> Result<()> {
        self.sink.prepare(&SESSION_CATEGORIES)?;
        for category in SESSION_CATEGORIES {
            self.refresh_hand(category)?;
        }
        info!("session '{}' written", self.config.name());
        Ok(())
    }

    /// Remove a category's images without touching the held cards.
    pub fn empty_hand(&self, category: Category) -> Result<()> {
        self.table(category)?;
        self.sink.remove_all(category)
    }

    /// Clear stale images, then write the currently held cards.
    pub fn refresh_hand(&self, category: Category) -> Result<()> {
        let table = self.table(category)?;
        self.sink.remove_all(category)?;
        self.sink.copy_in(category, table.hand.cards())
    }

    /// Discard and redraw a category's hand, then refresh its images.
    pub fn replenish(&mut self, category: Category) -> Result<()> {
        let Table { pool, hand } = self
            .tables
            .get_mut(&category)
            .ok_or_else(|| anyhow!("{category} are not dealt in this session"))?;
        hand.use_raven(pool, &mut self.rng)
            .with_context(|| format!("failed to replenish {category}"))?;
        self.refresh_hand(category)
    }

    /// Run one menu command. Settings are written to `out`.
    pub fn dispatch<W: Write>(&mut self, command: Command, out: &mut W) -> Result<Flow> {
        match command {
            Command::EmptyVisions => self.empty_hand(Category::Visions)?,
            Command::RestoreVisions => self.refresh_hand(Category::Visions)?,
            Command::ReplenishVisions => self.replenish(Category::Visions)?,
            Command::ShowSettings => writeln!(out, "{}", self.config)?,
            Command::Exit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    fn table(&self, category: Category) -> Result<&Table> {
        self.tables
            .get(&category)
            .ok_or_else(|| anyhow!("{category} are not dealt in this session"))
    }
}
