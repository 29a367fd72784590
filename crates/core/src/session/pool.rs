use std::sync::Arc;

use rand::Rng;
use tracing::{debug, info};

use crate::{
    catalog::{Catalog, Category, Expansion},
    error::PoolError,
};

/// Cards of one category that have not been drawn yet.
#[derive(Debug, Clone)]
pub struct CardPool {
    category: Category,
    expansions: Vec<Expansion>,
    catalog: Arc<Catalog>,
    cards: Vec<String>,
}

impl CardPool {
    /// Create a pool and stock it from the selected expansions.
    pub fn new(
        category: Category,
        catalog: Arc<Catalog>,
        expansions: &[Expansion],
    ) -> Result<Self, PoolError> {
        let mut pool = Self {
            category,
            expansions: expansions.to_vec(),
            catalog,
            cards: Vec::new(),
        };
        pool.generate_pool()?;
        Ok(pool)
    }

    /// Append every catalogued card of this category from each selected
    /// expansion, in selection order. Returns the number of cards added.
    ///
    /// Calling this on a partially drawn pool restocks it with the full
    /// catalog again, so identifiers may then appear twice. Expansions with
    /// no cards in this category are skipped.
    pub fn generate_pool(&mut self) -> Result<usize, PoolError> {
        let mut stock = Vec::new();
        for &expansion in &self.expansions {
            let categories = self
                .catalog
                .categories(expansion)
                .ok_or(PoolError::MissingExpansion(expansion))?;
            let Some(cards) = categories.get(&self.category) else {
                continue;
            };
            if let Some(card) = cards.iter().find(|card| !is_plain_identifier(card)) {
                return Err(PoolError::MalformedEntry {
                    expansion,
                    category: self.category,
                    card: card.clone(),
                });
            }
            stock.extend(cards.iter().cloned());
        }

        let added = stock.len();
        self.cards.append(&mut stock);
        info!(
            "generated {} pool: {added} cards added, {} available",
            self.category,
            self.cards.len()
        );
        Ok(added)
    }

    /// Remove and return one card chosen uniformly at random.
    pub fn take_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<String> {
        if self.cards.is_empty() {
            return None;
        }
        let index = rng.gen_range(0..self.cards.len());
        let card = self.cards.remove(index);
        debug!("took {card} from {} pool", self.category);
        Some(card)
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Cards still available, in stocking order.
    pub fn cards(&self) -> &[String] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn contains(&self, card: &str) -> bool {
        self.cards.iter().any(|held| held == card)
    }
}

/// Identifiers double as image file names, so they must not be blank or
/// carry path separators.
fn is_plain_identifier(card: &str) -> bool {
    !card.trim().is_empty() && !card.contains(['/', '\\']) && !card.contains("..")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn unions_selected_expansions_in_order() {
        let pool = CardPool::new(
            Category::Characters,
            Catalog::standard(),
            &[Expansion::HiddenSigns, Expansion::Base],
        )
        .unwrap();
        assert_eq!(pool.len(), 24);
        assert_eq!(pool.cards()[0], "HS1");
        assert_eq!(pool.cards()[6], "1");
    }

    #[test]
    fn skips_expansions_without_the_category() {
        let pool = CardPool::new(
            Category::Story,
            Catalog::standard(),
            &[Expansion::Base, Expansion::SecretsAndLies],
        )
        .unwrap();
        assert_eq!(pool.len(), 18);

        let empty = CardPool::new(
            Category::Motives,
            Catalog::standard(),
            &[Expansion::Base],
        )
        .unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn regenerating_restocks_with_full_catalog() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut pool =
            CardPool::new(Category::Objects, Catalog::standard(), &[Expansion::Base]).unwrap();
        let taken = pool.take_random(&mut rng).unwrap();
        assert!(!pool.contains(&taken));
        assert_eq!(pool.len(), 17);

        assert_eq!(pool.generate_pool().unwrap(), 18);
        assert_eq!(pool.len(), 35);
        assert!(pool.contains(&taken));
    }

    #[test]
    fn missing_expansion_is_reported() {
        let mut catalog = Catalog::default();
        catalog.insert(Expansion::Base, Category::Visions, ["1", "2"]);
        let err = CardPool::new(
            Category::Visions,
            Arc::new(catalog),
            &[Expansion::Base, Expansion::HiddenSigns],
        )
        .unwrap_err();
        assert!(matches!(err, PoolError::MissingExpansion(Expansion::HiddenSigns)));
    }

    #[test]
    fn blank_identifiers_are_rejected() {
        let mut catalog = Catalog::default();
        catalog.insert(Expansion::Base, Category::Visions, ["1", " "]);
        let err = CardPool::new(Category::Visions, Arc::new(catalog), &[Expansion::Base])
            .unwrap_err();
        assert!(matches!(err, PoolError::MalformedEntry { .. }));
    }

    #[test]
    fn path_like_identifiers_are_rejected() {
        for bad in ["../../escaped", "/etc/passwd", "a\\b", "nested/card", ".."] {
            let mut catalog = Catalog::default();
            catalog.insert(Expansion::Base, Category::Visions, ["1", bad]);
            let err = CardPool::new(Category::Visions, Arc::new(catalog), &[Expansion::Base])
                .unwrap_err();
            assert!(
                matches!(err, PoolError::MalformedEntry { ref card, .. } if card == bad),
                "{bad} should be rejected"
            );
        }

        let mut catalog = Catalog::default();
        catalog.insert(Expansion::Base, Category::Motives, ["Hearth and Home", "SL.1"]);
        let pool =
            CardPool::new(Category::Motives, Arc::new(catalog), &[Expansion::Base]).unwrap();
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn take_random_empties_the_pool() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut catalog = Catalog::default();
        catalog.insert(Expansion::Base, Category::Locations, ["a", "b"]);
        let mut pool =
            CardPool::new(Category::Locations, Arc::new(catalog), &[Expansion::Base]).unwrap();
        let mut drawn = vec![
            pool.take_random(&mut rng).unwrap(),
            pool.take_random(&mut rng).unwrap(),
        ];
        drawn.sort();
        assert_eq!(drawn, vec!["a".to_string(), "b".to_string()]);
        assert!(pool.take_random(&mut rng).is_none());
    }
}
