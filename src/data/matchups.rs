use super::source::SynergySource;
use crate::HeroId;
use crate::Score;
use serde::Deserialize;
use serde::Serialize;
use std::collections::HashMap;

/// One imported statistic row. Synergy is symmetric between `a` and `b`;
/// counter reads as "`a` counters `b` at this score".
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MatchupRecord {
    pub a: HeroId,
    pub b: HeroId,
    #[serde(default)]
    pub synergy: Option<Score>,
    #[serde(default)]
    pub counter: Option<Score>,
}

/// In-memory synergy/counter statistics, loadable from a JSON record list.
#[derive(Debug, Clone, Default)]
pub struct MatchupTable {
    synergy: HashMap<(HeroId, HeroId), Score>,
    counter: HashMap<(HeroId, HeroId), Score>,
}

/// Symmetric pairs store under one canonical key order.
fn paired(a: HeroId, b: HeroId) -> (HeroId, HeroId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

impl MatchupTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a table from a JSON array of [`MatchupRecord`]s.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let records = serde_json::from_str::<Vec<MatchupRecord>>(json)?;
        log::info!("loaded {} matchup records", records.len());
        let mut table = Self::new();
        for record in records {
            if let Some(score) = record.synergy {
                table.set_synergy(record.a, record.b, score);
            }
            if let Some(score) = record.counter {
                table.set_counter(record.a, record.b, score);
            }
        }
        Ok(table)
    }

    pub fn set_synergy(&mut self, a: HeroId, b: HeroId, score: Score) {
        self.synergy.insert(paired(a, b), score);
    }

    pub fn set_counter(&mut self, hero: HeroId, enemy: HeroId, score: Score) {
        self.counter.insert((hero, enemy), score);
    }

    fn ranked(entries: HashMap<HeroId, Score>, limit: usize) -> Vec<HeroId> {
        let mut entries = entries.into_iter().collect::<Vec<(HeroId, Score)>>();
        entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        entries.truncate(limit);
        entries.into_iter().map(|(id, _)| id).collect()
    }
}

impl SynergySource for MatchupTable {
    fn synergy(&self, hero: HeroId, ally: HeroId) -> Option<Score> {
        self.synergy.get(&paired(hero, ally)).copied()
    }

    fn counter(&self, hero: HeroId, enemy: HeroId) -> Option<Score> {
        self.counter.get(&(hero, enemy)).copied()
    }

    fn synergies(&self, hero: HeroId) -> HashMap<HeroId, Score> {
        self.synergy
            .iter()
            .filter_map(|((a, b), score)| match (hero == *a, hero == *b) {
                (true, false) => Some((*b, *score)),
                (false, true) => Some((*a, *score)),
                _ => None,
            })
            .collect()
    }

    fn counters(&self, hero: HeroId) -> HashMap<HeroId, Score> {
        self.counter
            .iter()
            .filter(|((a, _), _)| *a == hero)
            .map(|((_, enemy), score)| (*enemy, *score))
            .collect()
    }

    fn best_synergies(&self, hero: HeroId, limit: usize) -> Vec<HeroId> {
        Self::ranked(self.synergies(hero), limit)
    }

    fn best_counters(&self, hero: HeroId, limit: usize) -> Vec<HeroId> {
        Self::ranked(self.counters(hero), limit)
    }

    fn countered_by(&self, hero: HeroId, limit: usize) -> Vec<HeroId> {
        let threats = self
            .counter
            .iter()
            .filter(|((_, b), _)| *b == hero)
            .map(|((enemy, _), score)| (*enemy, *score))
            .collect::<HashMap<HeroId, Score>>();
        Self::ranked(threats, limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synergy_is_symmetric() {
        let mut table = MatchupTable::new();
        table.set_synergy(7, 3, 0.8);
        assert!(table.synergy(7, 3) == Some(0.8));
        assert!(table.synergy(3, 7) == Some(0.8));
        assert!(table.synergy(3, 8).is_none());
    }

    #[test]
    fn counter_is_directional() {
        let mut table = MatchupTable::new();
        table.set_counter(1, 2, 0.9);
        assert!(table.counter(1, 2) == Some(0.9));
        assert!(table.counter(2, 1).is_none());
    }

    #[test]
    fn bulk_maps_collect_per_hero() {
        let mut table = MatchupTable::new();
        table.set_synergy(1, 2, 0.6);
        table.set_synergy(3, 1, 0.7);
        table.set_synergy(2, 3, 0.4);
        let synergies = table.synergies(1);
        assert!(synergies.len() == 2);
        assert!(synergies[&2] == 0.6);
        assert!(synergies[&3] == 0.7);
        table.set_counter(1, 4, 0.3);
        table.set_counter(5, 1, 0.8);
        let counters = table.counters(1);
        assert!(counters.len() == 1);
        assert!(counters[&4] == 0.3);
    }

    #[test]
    fn rankings_sort_best_first_and_respect_limit() {
        let mut table = MatchupTable::new();
        table.set_synergy(1, 2, 0.5);
        table.set_synergy(1, 3, 0.9);
        table.set_synergy(1, 4, 0.7);
        assert!(table.best_synergies(1, 10) == [3, 4, 2]);
        assert!(table.best_synergies(1, 2) == [3, 4]);
        table.set_counter(1, 5, 0.9);
        table.set_counter(1, 6, 0.2);
        assert!(table.best_counters(1, 10) == [5, 6]);
        table.set_counter(7, 1, 0.95);
        table.set_counter(8, 1, 0.6);
        assert!(table.countered_by(1, 10) == [7, 8]);
        assert!(table.countered_by(1, 1) == [7]);
    }

    #[test]
    fn averages_default_neutral() {
        let mut table = MatchupTable::new();
        assert!(table.average_synergy(1, &[]) == 0.5);
        assert!(table.average_synergy(1, &[2, 3]) == 0.5);
        table.set_synergy(1, 2, 0.9);
        // known pairs average, unknown pairs are skipped
        assert!((table.average_synergy(1, &[2, 3]) - 0.9).abs() < 1e-9);
        table.set_counter(1, 9, 0.1);
        assert!((table.average_counter(1, &[9]) - 0.1).abs() < 1e-9);
        assert!(table.average_counter(2, &[9]) == 0.5);
    }

    #[test]
    fn loads_from_json() {
        let json = r#"[
            {"a": 1, "b": 2, "synergy": 0.8},
            {"a": 1, "b": 3, "counter": 0.7},
            {"a": 2, "b": 3, "synergy": 0.4, "counter": 0.6}
        ]"#;
        let table = MatchupTable::from_json(json).unwrap();
        assert!(table.synergy(2, 1) == Some(0.8));
        assert!(table.counter(1, 3) == Some(0.7));
        assert!(table.synergy(3, 2) == Some(0.4));
        assert!(table.counter(2, 3) == Some(0.6));
        assert!(table.counter(3, 2).is_none());
        assert!(MatchupTable::from_json("nope").is_err());
    }
}
