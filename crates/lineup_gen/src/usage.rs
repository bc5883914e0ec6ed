use crate::player::{Player, PlayerId, Pool};

use serde::Serialize;
use std::collections::HashMap;

/// Per-player selection counts for one generation run.
///
/// Every pool player has an entry from the start, so players that were
/// never picked still report zero. Entries iterate in pool order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsageCounter {
    ids: Vec<PlayerId>,
    counts: Vec<u32>,
    index: HashMap<PlayerId, usize>,
}

impl UsageCounter {
    pub fn for_pool(pool: &Pool) -> Self {
        let ids: Vec<PlayerId> = pool.iter().map(|p| p.id).collect();
        let index = ids.iter().enumerate().map(|(i, &id)| (id, i)).collect();
        Self {
            counts: vec![0; ids.len()],
            ids,
            index,
        }
    }

    /// Count for a player, `None` if the id was not in the pool
    pub fn get(&self, id: PlayerId) -> Option<u32> {
        self.index.get(&id).map(|&i| self.counts[i])
    }

    pub(crate) fn count_at(&self, pool_index: usize) -> u32 {
        self.counts[pool_index]
    }

    pub(crate) fn increment_at(&mut self, pool_index: usize) {
        self.counts[pool_index] += 1;
    }

    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, u32)> + '_ {
        self.ids.iter().copied().zip(self.counts.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Report rows sorted by count (descending), then pool order
    pub fn rows<'a>(&self, pool: &'a Pool, total_lineups: usize) -> Vec<UsageRow<'a>> {
        let mut rows: Vec<UsageRow<'a>> = pool
            .iter()
            .zip(self.counts.iter().copied())
            .map(|(player, count)| UsageRow {
                player,
                count,
                exposure_pct: exposure_pct(count, total_lineups),
            })
            .collect();
        // stable, so equal counts keep pool order
        rows.sort_by(|a, b| b.count.cmp(&a.count));
        rows
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UsageRow<'a> {
    pub player: &'a Player,
    pub count: u32,
    /// share of lineups containing the player, in percent
    pub exposure_pct: f64,
}

fn exposure_pct(count: u32, total_lineups: usize) -> f64 {
    if total_lineups == 0 {
        return 0.0;
    }
    f64::from(count) * 100.0 / total_lineups as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::Position;

    fn pool() -> Pool {
        Pool::new(vec![
            Player::new(10, "A", "T", Position::QB, 0, 1.0, 1.0),
            Player::new(20, "B", "T", Position::RB, 0, 1.0, 1.0),
            Player::new(30, "C", "T", Position::WR, 0, 1.0, 1.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_counter_starts_at_zero_for_every_player() {
        let usage = UsageCounter::for_pool(&pool());
        assert_eq!(usage.len(), 3);
        assert!(usage.iter().all(|(_, c)| c == 0));
        assert_eq!(usage.get(PlayerId(20)), Some(0));
        assert_eq!(usage.get(PlayerId(99)), None);
    }

    #[test]
    fn test_increment_by_pool_index() {
        let mut usage = UsageCounter::for_pool(&pool());
        usage.increment_at(2);
        usage.increment_at(2);
        assert_eq!(usage.get(PlayerId(30)), Some(2));
        assert_eq!(usage.count_at(2), 2);
        assert_eq!(usage.get(PlayerId(10)), Some(0));
    }

    #[test]
    fn test_iter_follows_pool_order() {
        let usage = UsageCounter::for_pool(&pool());
        let ids: Vec<u32> = usage.iter().map(|(id, _)| id.0).collect();
        assert_eq!(ids, vec![10, 20, 30]);
    }

    #[test]
    fn test_rows_sorted_by_count_then_pool_order() {
        let pool = pool();
        let mut usage = UsageCounter::for_pool(&pool);
        usage.increment_at(1);
        usage.increment_at(1);
        usage.increment_at(2);

        let rows = usage.rows(&pool, 4);
        let names: Vec<&str> = rows.iter().map(|r| r.player.name.as_str()).collect();
        assert_eq!(names, vec!["B", "C", "A"]);
        assert_eq!(rows[0].exposure_pct, 50.0);
        assert_eq!(rows[2].exposure_pct, 0.0);
    }

    #[test]
    fn test_empty_pool() {
        let usage = UsageCounter::for_pool(&Pool::default());
        assert!(usage.is_empty());
        assert!(usage.rows(&Pool::default(), 0).is_empty());
    }
}
