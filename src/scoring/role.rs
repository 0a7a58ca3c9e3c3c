use super::component::ScoreComponent;
use crate::draft::DraftPhase;
use crate::heroes::Hero;
use crate::heroes::Role;
use crate::Score;
use std::collections::HashSet;
use std::sync::Arc;

/// Penalty applied to a duplicate Carry in the late pick phases.
const DUPLICATE_PENALTY: Score = 0.7;

/// Scores a candidate by the lineup gaps it fills.
pub struct RoleScorer;

impl RoleScorer {
    /// Fraction of the missing core roles the candidate covers; 0.5 when
    /// the team has no picks yet or already covers everything. A second
    /// Carry is tolerated early and penalized in pick phases 2 and 3.
    pub fn score(&self, hero: &Hero, allies: &[Arc<Hero>], phase: DraftPhase) -> ScoreComponent {
        if allies.is_empty() {
            return ScoreComponent::role(0.5, "first pick, flexible");
        }
        let covered = allies
            .iter()
            .flat_map(|ally| ally.roles.iter().copied())
            .collect::<HashSet<Role>>();
        let missing = Role::CORE
            .iter()
            .copied()
            .filter(|role| !covered.contains(role))
            .collect::<Vec<Role>>();
        let fills = hero
            .roles
            .iter()
            .copied()
            .filter(|role| missing.contains(role))
            .collect::<Vec<Role>>();
        let mut value = if missing.is_empty() {
            0.5
        } else {
            fills.len() as Score / missing.len() as Score
        };
        let duplicate =
            hero.has_role(Role::Carry) && allies.iter().any(|ally| ally.has_role(Role::Carry));
        if duplicate && phase.is_late() {
            value *= DUPLICATE_PENALTY;
        }
        ScoreComponent::role(value.min(1.0), describe(&fills, &missing, duplicate))
    }
}

fn describe(fills: &[Role], missing: &[Role], duplicate: bool) -> String {
    if fills.is_empty() && missing.is_empty() {
        "team roles complete".to_string()
    } else if !fills.is_empty() {
        let names = fills
            .iter()
            .map(Role::to_string)
            .collect::<Vec<String>>()
            .join(", ");
        format!("fills {}", names)
    } else if duplicate {
        "duplicate core role".to_string()
    } else {
        "does not fill missing roles".to_string()
    }
}
