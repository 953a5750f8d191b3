use rand::Rng;

use crate::model::{Fact, fact_table};

/// Facts that have not been graded correct since the pool was last initialized.
///
/// Internally an ordered sequence, but order carries no meaning: draws pick a
/// uniformly random index and re-inserted facts go to the back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FactPool {
    facts: Vec<Fact>,
}

impl FactPool {
    /// An empty pool. Call [`FactPool::initialize`] to fill it.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A pool holding the whole table.
    #[must_use]
    pub fn full() -> Self {
        Self {
            facts: fact_table(),
        }
    }

    /// Replaces the contents with every fact of the table, once each.
    pub fn initialize(&mut self) {
        self.facts = fact_table();
    }

    /// Removes and returns a uniformly random fact, or `None` once the pool is empty.
    pub fn draw_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Fact> {
        if self.facts.is_empty() {
            return None;
        }
        let index = rng.random_range(0..self.facts.len());
        Some(self.facts.swap_remove(index))
    }

    pub fn reinsert(&mut self, fact: Fact) {
        self.facts.push(fact);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.facts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    #[must_use]
    pub fn contains(&self, fact: &Fact) -> bool {
        self.facts.contains(fact)
    }

    /// Number of copies of `fact` currently in the pool.
    #[must_use]
    pub fn count(&self, fact: &Fact) -> usize {
        self.facts.iter().filter(|f| *f == fact).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Fact> {
        self.facts.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::model::TOTAL_FACTS;

    #[test]
    fn initialize_fills_the_table() {
        let mut pool = FactPool::new();
        assert!(pool.is_empty());

        pool.initialize();
        assert_eq!(pool.len(), TOTAL_FACTS);
        assert_eq!(pool, FactPool::full());

        let facts: HashSet<_> = pool.iter().copied().collect();
        assert_eq!(facts.len(), TOTAL_FACTS);
        assert!(pool.iter().all(|f| (1..=12).contains(&f.left())));
    }

    #[test]
    fn initialize_discards_previous_contents() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut pool = FactPool::full();
        let fact = pool.draw_random(&mut rng).unwrap();
        pool.reinsert(fact);
        pool.reinsert(fact);

        pool.initialize();
        assert_eq!(pool.len(), TOTAL_FACTS);
        assert_eq!(pool.count(&fact), 1);
    }

    #[test]
    fn draining_yields_each_fact_once() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut pool = FactPool::full();
        let mut seen = HashSet::new();

        while let Some(fact) = pool.draw_random(&mut rng) {
            assert!(seen.insert(fact), "{fact} drawn twice");
        }

        assert_eq!(seen.len(), TOTAL_FACTS);
        assert!(pool.draw_random(&mut rng).is_none());
    }

    #[test]
    fn draw_removes_and_reinsert_restores() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut pool = FactPool::full();

        let fact = pool.draw_random(&mut rng).unwrap();
        assert_eq!(pool.len(), TOTAL_FACTS - 1);
        assert!(!pool.contains(&fact));

        pool.reinsert(fact);
        assert_eq!(pool.len(), TOTAL_FACTS);
        assert_eq!(pool.count(&fact), 1);
    }

    #[test]
    fn draws_cover_a_small_pool_evenly() {
        let mut rng = StdRng::seed_from_u64(11);
        let facts = [Fact::new(2, 3).unwrap(), Fact::new(4, 5).unwrap()];
        let mut hits = [0_u32; 2];

        for _ in 0..2_000 {
            let mut pool = FactPool::new();
            for fact in facts {
                pool.reinsert(fact);
            }
            let drawn = pool.draw_random(&mut rng).unwrap();
            let slot = facts.iter().position(|f| *f == drawn).unwrap();
            hits[slot] += 1;
        }

        // Loose bound: both outcomes should land near 1000.
        assert!(hits.iter().all(|&h| (800..=1200).contains(&h)), "{hits:?}");
    }
}
