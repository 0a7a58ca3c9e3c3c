use crate::data::SynergySource;
use crate::draft::DraftState;
use crate::draft::Team;
use crate::heroes::Hero;
use crate::Probability;
use crate::Score;
use std::sync::Arc;

/// Reduces a draft to a single match-outcome estimate.
///
/// Each side gets a strength of half internal synergy, half counter
/// advantage over the opponent; the strength gap runs through a logistic
/// transform, so the result lives strictly inside (0, 1).
pub struct WinProbability<'a> {
    stats: &'a dyn SynergySource,
}

impl<'a> WinProbability<'a> {
    pub fn new(stats: &'a dyn SynergySource) -> Self {
        Self { stats }
    }

    /// Probability that Radiant wins; exactly 0.5 before any pick lands.
    pub fn radiant(&self, state: &DraftState) -> Probability {
        let radiant = state.picks(Team::Radiant);
        let dire = state.picks(Team::Dire);
        if radiant.is_empty() && dire.is_empty() {
            return 0.5;
        }
        let gap = self.strength(radiant, dire) - self.strength(dire, radiant);
        1.0 / (1.0 + (-2.0 * gap).exp())
    }

    pub fn dire(&self, state: &DraftState) -> Probability {
        1.0 - self.radiant(state)
    }

    fn strength(&self, team: &[Arc<Hero>], enemies: &[Arc<Hero>]) -> Score {
        if team.is_empty() {
            return 0.5;
        }
        0.5 * self.cohesion(team) + 0.5 * self.advantage(team, enemies)
    }

    /// Mean pairwise synergy within the team; 0.5 under two picks.
    fn cohesion(&self, team: &[Arc<Hero>]) -> Score {
        if team.len() < 2 {
            return 0.5;
        }
        let mut total = 0.0;
        let mut pairs = 0;
        for (i, a) in team.iter().enumerate() {
            for b in &team[i + 1..] {
                total += self.stats.synergy(a.id, b.id).unwrap_or(0.5);
                pairs += 1;
            }
        }
        total / pairs as Score
    }

    /// Mean counter score over every ally x enemy pair; 0.5 when either
    /// side is empty.
    fn advantage(&self, team: &[Arc<Hero>], enemies: &[Arc<Hero>]) -> Score {
        if team.is_empty() || enemies.is_empty() {
            return 0.5;
        }
        let mut total = 0.0;
        let mut matchups = 0;
        for ally in team {
            for enemy in enemies {
                total += self.stats.counter(ally.id, enemy.id).unwrap_or(0.5);
                matchups += 1;
            }
        }
        total / matchups as Score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MatchupTable;
    use crate::draft::DraftEngine;
    use crate::draft::DraftMode;
    use crate::HeroId;

    fn pool(n: u32) -> Vec<Arc<Hero>> {
        (1..=n)
            .map(|i| Arc::new(Hero::named(i, &format!("hero_{i}"), &format!("Hero {i}"))))
            .collect()
    }

    fn drafted(heroes: &[Arc<Hero>], picks: usize) -> DraftState {
        let engine = DraftMode::AllPick.engine();
        let mut state = engine.start(heroes.to_vec(), false).unwrap();
        for hero in heroes.iter().take(picks) {
            state = engine.pick(&state, hero).unwrap();
        }
        state
    }

    #[test]
    fn empty_teams_are_a_coin_flip() {
        let stats = MatchupTable::new();
        let heroes = pool(10);
        let state = drafted(&heroes, 0);
        assert!(WinProbability::new(&stats).radiant(&state) == 0.5);
    }

    #[test]
    fn neutral_data_stays_near_even() {
        let stats = MatchupTable::new();
        let heroes = pool(12);
        for picks in 1..=10 {
            let state = drafted(&heroes, picks);
            let p = WinProbability::new(&stats).radiant(&state);
            assert!(p >= 0.45 && p <= 0.55);
            assert!(p > 0.0 && p < 1.0);
        }
    }

    #[test]
    fn synergy_advantage_tilts_radiant() {
        let mut stats = MatchupTable::new();
        let heroes = pool(12);
        // alternating picks put odd ids on radiant
        stats.set_synergy(1, 3, 1.0);
        stats.set_synergy(1, 5, 1.0);
        stats.set_synergy(3, 5, 1.0);
        let state = drafted(&heroes, 6);
        let p = WinProbability::new(&stats).radiant(&state);
        assert!(p > 0.5);
        assert!(p < 1.0);
        let q = WinProbability::new(&stats).dire(&state);
        assert!((p + q - 1.0).abs() < 1e-12);
    }

    #[test]
    fn counter_disadvantage_tilts_dire() {
        let mut stats = MatchupTable::new();
        let heroes = pool(12);
        // every dire pick counters every radiant pick hard
        for dire in [2 as HeroId, 4, 6] {
            for radiant in [1 as HeroId, 3, 5] {
                stats.set_counter(dire, radiant, 1.0);
                stats.set_counter(radiant, dire, 0.0);
            }
        }
        let state = drafted(&heroes, 6);
        let p = WinProbability::new(&stats).radiant(&state);
        assert!(p < 0.5);
        assert!(p > 0.0);
    }

    #[test]
    fn lopsided_draft_stays_inside_open_interval() {
        let mut stats = MatchupTable::new();
        let heroes = pool(12);
        for a in 1..=9 as HeroId {
            for b in (a + 1)..=10 {
                stats.set_synergy(a, b, if a % 2 == 1 { 1.0 } else { 0.0 });
                stats.set_counter(a, b, 1.0);
                stats.set_counter(b, a, 0.0);
            }
        }
        let state = drafted(&heroes, 10);
        let p = WinProbability::new(&stats).radiant(&state);
        assert!(p > 0.0 && p < 1.0);
    }
}
