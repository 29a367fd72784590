use std::fmt;

use rand::Rng;
use tracing::{debug, info, warn};

use crate::{
    catalog::Category,
    error::{HandError, PoolError},
};

use super::pool::CardPool;

/// Cards currently held for one category, bounded by a quota.
///
/// A hand does not own its pool; every drawing operation borrows the pool
/// it was dealt from, so the same pool must be passed each time.
#[derive(Debug, Clone)]
pub struct Hand {
    category: Category,
    name: String,
    cards: Vec<String>,
    limit: usize,
}

impl Hand {
    /// Empty hand with the given capacity.
    pub fn new(category: Category, limit: usize) -> Self {
        Self {
            category,
            name: category.hand_name().to_string(),
            cards: Vec::new(),
            limit,
        }
    }

    /// Create a hand and fill it to `limit` from `pool`.
    pub fn dealt<R: Rng + ?Sized>(
        pool: &mut CardPool,
        limit: usize,
        rng: &mut R,
    ) -> Result<Self, HandError> {
        let mut hand = Self::new(pool.category(), limit);
        hand.draw_hand(pool, rng)?;
        Ok(hand)
    }

    /// Move one random card from the pool into the hand.
    ///
    /// An exhausted pool is restocked from the full catalog first.
    pub fn draw_card<R: Rng + ?Sized>(
        &mut self,
        pool: &mut CardPool,
        rng: &mut R,
    ) -> Result<&str, HandError> {
        debug_assert_eq!(pool.category(), self.category);
        if pool.is_empty() {
            warn!("{} pool exhausted, restocking from catalog", self.category);
            pool.generate_pool()?;
        }
        let card = pool
            .take_random(rng)
            .ok_or(PoolError::EmptyCatalog(self.category))?;
        self.cards.push(card);
        Ok(self.cards.last().map(String::as_str).unwrap_or_default())
    }

    /// Draw until the hand holds `limit` cards.
    pub fn draw_hand<R: Rng + ?Sized>(
        &mut self,
        pool: &mut CardPool,
        rng: &mut R,
    ) -> Result<(), HandError> {
        while self.cards.len() < self.limit {
            self.draw_card(pool, rng)?;
        }
        debug!("{}: {:?}", self.name, self.cards);
        Ok(())
    }

    /// Remove one specific card from the hand.
    pub fn discard_card(&mut self, card: &str) -> Result<String, HandError> {
        let index = self
            .cards
            .iter()
            .position(|held| held == card)
            .ok_or_else(|| HandError::NotHeld {
                category: self.category,
                card: card.to_string(),
            })?;
        Ok(self.cards.remove(index))
    }

    /// Drop every held card. Discarded cards do not return to the pool.
    pub fn discard_hand(&mut self) -> Vec<String> {
        let discarded: Vec<String> = self.cards.drain(..).collect();
        if !discarded.is_empty() {
            debug!("{} discarded {} cards", self.name, discarded.len());
        }
        discarded
    }

    /// Replace the whole hand: discard everything, then draw back to the limit.
    pub fn use_raven<R: Rng + ?Sized>(
        &mut self,
        pool: &mut CardPool,
        rng: &mut R,
    ) -> Result<(), HandError> {
        let discarded = self.discard_hand();
        self.draw_hand(pool, rng)?;
        info!(
            "{} replenished: {} discarded, {} drawn",
            self.name,
            discarded.len(),
            self.cards.len()
        );
        Ok(())
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Held cards in draw order.
    pub fn cards(&self) -> &[String] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : [{}]", self.name, self.cards.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::HashSet, sync::Arc};

    use super::*;
    use crate::catalog::{Catalog, Expansion};
    use rand::{rngs::StdRng, SeedableRng};

    fn base_pool(category: Category) -> CardPool {
        CardPool::new(category, Catalog::standard(), &[Expansion::Base]).unwrap()
    }

    fn small_pool(cards: &[&str]) -> CardPool {
        let mut catalog = Catalog::default();
        catalog.insert(Expansion::Base, Category::Visions, cards.iter().copied());
        CardPool::new(Category::Visions, Arc::new(catalog), &[Expansion::Base]).unwrap()
    }

    #[test]
    fn dealt_hand_and_pool_are_disjoint() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut pool = base_pool(Category::Characters);
        let hand = Hand::dealt(&mut pool, 6, &mut rng).unwrap();

        assert_eq!(hand.len(), 6);
        assert_eq!(pool.len(), 12);
        let held: HashSet<&String> = hand.cards().iter().collect();
        assert_eq!(held.len(), 6);
        for card in hand.cards() {
            let number: u32 = card.parse().unwrap();
            assert!((1..=18).contains(&number));
            assert!(!pool.contains(card));
        }
    }

    #[test]
    fn same_seed_same_hand() {
        let deal = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut pool = base_pool(Category::Visions);
            Hand::dealt(&mut pool, 7, &mut rng).unwrap().cards().to_vec()
        };
        assert_eq!(deal(9), deal(9));
    }

    #[test]
    fn exhausted_pool_regenerates_until_full() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut pool = small_pool(&["a", "b", "c"]);
        let hand = Hand::dealt(&mut pool, 5, &mut rng).unwrap();

        assert_eq!(hand.len(), 5);
        // first stock of three is fully drawn before the restock
        let first_stock: HashSet<&String> = hand.cards()[..3].iter().collect();
        assert_eq!(first_stock.len(), 3);
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn empty_catalog_fails_instead_of_spinning() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut pool = base_pool(Category::Motives);
        let err = Hand::dealt(&mut pool, 2, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            HandError::Pool(PoolError::EmptyCatalog(Category::Motives))
        ));
    }

    #[test]
    fn discard_card_removes_only_held_cards() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut pool = small_pool(&["1", "4", "7"]);
        let mut hand = Hand::dealt(&mut pool, 3, &mut rng).unwrap();

        assert_eq!(hand.discard_card("1").unwrap(), "1");
        let mut rest = hand.cards().to_vec();
        rest.sort();
        assert_eq!(rest, vec!["4".to_string(), "7".to_string()]);

        let err = hand.discard_card("9").unwrap_err();
        assert!(matches!(err, HandError::NotHeld { ref card, .. } if card == "9"));
        assert_eq!(hand.len(), 2);
    }

    #[test]
    fn discard_hand_on_empty_hand_is_a_no_op() {
        let mut hand = Hand::new(Category::Visions, 7);
        assert!(hand.discard_hand().is_empty());
        assert!(hand.discard_hand().is_empty());
        assert!(hand.is_empty());
    }

    #[test]
    fn use_raven_refills_to_limit_with_new_cards() {
        let mut rng = StdRng::seed_from_u64(21);
        let mut pool = base_pool(Category::Visions);
        let mut hand = Hand::dealt(&mut pool, 7, &mut rng).unwrap();
        let before: HashSet<String> = hand.cards().iter().cloned().collect();

        hand.use_raven(&mut pool, &mut rng).unwrap();

        assert_eq!(hand.len(), 7);
        assert_eq!(pool.len(), 84 - 14);
        assert!(hand.cards().iter().all(|card| !before.contains(card)));
    }

    #[test]
    fn shows_hand_contents() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut pool = small_pool(&["x"]);
        let hand = Hand::dealt(&mut pool, 1, &mut rng).unwrap();
        assert_eq!(hand.to_string(), "Vision Cards : [x]");
    }
}
