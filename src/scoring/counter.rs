use super::component::ScoreComponent;
use crate::data::SynergySource;
use crate::heroes::Hero;
use crate::HeroId;
use crate::Score;
use std::sync::Arc;

/// Scores a candidate by how favorably it matches up into the enemy picks.
pub struct CounterScorer<'a> {
    stats: &'a dyn SynergySource,
}

impl<'a> CounterScorer<'a> {
    pub fn new(stats: &'a dyn SynergySource) -> Self {
        Self { stats }
    }

    /// Mean counter strength against the enemies, 0.5 per unknown pair.
    /// Neutral 0.5 when the enemy has no picks yet.
    pub fn score(&self, hero: &Hero, enemies: &[Arc<Hero>]) -> ScoreComponent {
        if enemies.is_empty() {
            return ScoreComponent::counter(0.5, "no enemies yet");
        }
        let ids = enemies.iter().map(|e| e.id).collect::<Vec<HeroId>>();
        let value = self.stats.average_counter(hero.id, &ids);
        ScoreComponent::counter(value, describe(value, enemies.len()))
    }
}

fn describe(value: Score, enemies: usize) -> String {
    if value >= 0.7 {
        format!("strong counter to {} enemies", enemies)
    } else if value >= 0.5 {
        "neutral matchup against enemies".to_string()
    } else {
        "countered by enemy picks".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MatchupTable;
    use crate::scoring::ComponentKind;

    fn hero(id: HeroId) -> Arc<Hero> {
        Arc::new(Hero::named(id, &format!("hero_{id}"), &format!("Hero {id}")))
    }

    #[test]
    fn no_enemies_is_neutral() {
        let stats = MatchupTable::new();
        let component = CounterScorer::new(&stats).score(&hero(1), &[]);
        assert!(component.kind == ComponentKind::Counter);
        assert!(component.value == 0.5);
        assert!(component.detail == "no enemies yet");
    }

    #[test]
    fn bands_follow_thresholds() {
        let mut stats = MatchupTable::new();
        stats.set_counter(1, 2, 0.8);
        stats.set_counter(1, 3, 0.1);
        let scorer = CounterScorer::new(&stats);
        let strong = scorer.score(&hero(1), &[hero(2)]);
        assert!(strong.detail == "strong counter to 1 enemies");
        let weak = scorer.score(&hero(1), &[hero(3)]);
        assert!(weak.detail == "countered by enemy picks");
        let both = scorer.score(&hero(1), &[hero(2), hero(3)]);
        assert!((both.value - 0.45).abs() < 1e-9);
    }

    #[test]
    fn counter_is_directional() {
        let mut stats = MatchupTable::new();
        stats.set_counter(1, 2, 0.9);
        let scorer = CounterScorer::new(&stats);
        // the reverse matchup carries no data and stays neutral
        let reverse = scorer.score(&hero(2), &[hero(1)]);
        assert!(reverse.value == 0.5);
    }
}
