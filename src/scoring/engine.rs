use super::component::ScoreComponent;
use super::counter::CounterScorer;
use super::recommendation::Recommendation;
use super::role::RoleScorer;
use super::synergy::SynergyScorer;
use crate::data::SynergySource;
use crate::draft::DraftState;
use crate::draft::Team;
use crate::heroes::Hero;
use crate::Score;
use std::sync::Arc;

/// Fixed component weights; tunable constants, not derived. Sum to 1.
pub const SYNERGY_WEIGHT: Score = 0.25;
pub const COUNTER_WEIGHT: Score = 0.30;
pub const ROLE_WEIGHT: Score = 0.25;
pub const META_WEIGHT: Score = 0.20;

/// Ranks the remaining pool for the team on turn by combining the
/// component scorers under the fixed weights above.
pub struct RecommendationEngine<'a> {
    stats: &'a dyn SynergySource,
}

impl<'a> RecommendationEngine<'a> {
    pub fn new(stats: &'a dyn SynergySource) -> Self {
        Self { stats }
    }

    /// Score every available hero for `team`, sort non-increasing, and
    /// keep the best `count`. Ties keep their iteration order.
    pub fn recommend(&self, state: &DraftState, team: Team, count: usize) -> Vec<Recommendation> {
        let allies = state.picks(team);
        let enemies = state.picks(team.opponent());
        let mut ranked = state
            .available()
            .iter()
            .map(|hero| self.score(hero, allies, enemies, state))
            .collect::<Vec<Recommendation>>();
        ranked.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ranked.truncate(count);
        ranked
    }

    fn score(
        &self,
        hero: &Arc<Hero>,
        allies: &[Arc<Hero>],
        enemies: &[Arc<Hero>],
        state: &DraftState,
    ) -> Recommendation {
        let synergy = SynergyScorer::new(self.stats).score(hero, allies);
        let counter = CounterScorer::new(self.stats).score(hero, enemies);
        let role = RoleScorer.score(hero, allies, state.phase());
        // placeholder signal, held at neutral until meta statistics exist
        let meta = ScoreComponent::meta(0.5, "meta scoring not implemented");
        let score = SYNERGY_WEIGHT * synergy.value
            + COUNTER_WEIGHT * counter.value
            + ROLE_WEIGHT * role.value
            + META_WEIGHT * meta.value;
        log::trace!("{} scores {:.3}", hero, score);
        Recommendation::new(hero.clone(), score, vec![synergy, counter, role, meta])
    }
}
