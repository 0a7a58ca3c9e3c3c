use super::component::ScoreComponent;
use crate::data::SynergySource;
use crate::heroes::Hero;
use crate::HeroId;
use crate::Score;
use std::sync::Arc;

/// Scores a candidate by how well it plays alongside the current allies.
pub struct SynergyScorer<'a> {
    stats: &'a dyn SynergySource,
}

impl<'a> SynergyScorer<'a> {
    pub fn new(stats: &'a dyn SynergySource) -> Self {
        Self { stats }
    }

    /// Mean pairwise synergy with the allies, 0.5 per unknown pair.
    /// Neutral 0.5 when the team has no picks yet.
    pub fn score(&self, hero: &Hero, allies: &[Arc<Hero>]) -> ScoreComponent {
        if allies.is_empty() {
            return ScoreComponent::synergy(0.5, "no allies yet");
        }
        let ids = allies.iter().map(|a| a.id).collect::<Vec<HeroId>>();
        let value = self.stats.average_synergy(hero.id, &ids);
        ScoreComponent::synergy(value, describe(value, allies.len()))
    }
}

fn describe(value: Score, allies: usize) -> String {
    if value >= 0.7 {
        format!("strong synergy with {} allies", allies)
    } else if value >= 0.5 {
        "neutral synergy with team".to_string()
    } else {
        "weak synergy with current lineup".to_string()
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
    fn no_allies_is_neutral() {
        let stats = MatchupTable::new();
        let component = SynergyScorer::new(&stats).score(&hero(1), &[]);
        assert!(component.kind == ComponentKind::Synergy);
        assert!(component.value == 0.5);
        assert!(component.detail == "no allies yet");
    }

    #[test]
    fn averages_known_pairs_and_defaults_unknown() {
        let mut stats = MatchupTable::new();
        stats.set_synergy(1, 2, 0.9);
        let scorer = SynergyScorer::new(&stats);
        // one known pair
        let component = scorer.score(&hero(1), &[hero(2)]);
        assert!((component.value - 0.9).abs() < 1e-9);
        assert!(component.detail == "strong synergy with 1 allies");
        // unknown pair falls back to neutral
        let component = scorer.score(&hero(1), &[hero(3)]);
        assert!(component.value == 0.5);
        assert!(component.detail == "neutral synergy with team");
    }

    #[test]
    fn weak_band_below_half() {
        let mut stats = MatchupTable::new();
        stats.set_synergy(1, 2, 0.2);
        let component = SynergyScorer::new(&stats).score(&hero(1), &[hero(2)]);
        assert!((component.value - 0.2).abs() < 1e-9);
        assert!(component.detail == "weak synergy with current lineup");
    }
}
