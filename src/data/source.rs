use crate::heroes::Attribute;
use crate::heroes::Hero;
use crate::heroes::Role;
use crate::HeroId;
use crate::Score;
use std::collections::HashMap;
use std::sync::Arc;

/// Read-only provider of the full hero catalog. Supplied once at draft
/// start and immutable for the draft's lifetime.
pub trait HeroSource {
    fn all(&self) -> Vec<Arc<Hero>>;
    fn by_id(&self, id: HeroId) -> Option<Arc<Hero>>;
    /// Lookup by internal name, e.g. "antimage".
    fn by_name(&self, name: &str) -> Option<Arc<Hero>>;
    fn by_attribute(&self, attribute: Attribute) -> Vec<Arc<Hero>>;
    fn by_role(&self, role: Role) -> Vec<Arc<Hero>>;
    /// Case-insensitive substring match on the display name.
    fn search(&self, query: &str) -> Vec<Arc<Hero>>;
    fn count(&self) -> usize;
}

/// Read-only provider of pairwise synergy and counter statistics.
///
/// All scores live in [0, 1]; `None` means no data and callers default
/// to the neutral 0.5. Synergy is symmetric, counter is directional:
/// `counter(a, b)` is how favorably `a` matches up against `b`.
pub trait SynergySource {
    fn synergy(&self, hero: HeroId, ally: HeroId) -> Option<Score>;
    fn counter(&self, hero: HeroId, enemy: HeroId) -> Option<Score>;

    /// Every known synergy partner of `hero` with its score.
    fn synergies(&self, hero: HeroId) -> HashMap<HeroId, Score>;
    /// Every known matchup of `hero` with its counter score.
    fn counters(&self, hero: HeroId) -> HashMap<HeroId, Score>;

    /// Ally ids ranked by synergy with `hero`, best first.
    fn best_synergies(&self, hero: HeroId, limit: usize) -> Vec<HeroId>;
    /// Enemy ids `hero` counters best, best matchup first.
    fn best_counters(&self, hero: HeroId, limit: usize) -> Vec<HeroId>;
    /// Enemy ids that counter `hero`, worst matchup first.
    fn countered_by(&self, hero: HeroId, limit: usize) -> Vec<HeroId>;

    /// Mean synergy of `hero` with the allies, skipping unknown pairs;
    /// 0.5 when nothing is known or the list is empty.
    fn average_synergy(&self, hero: HeroId, allies: &[HeroId]) -> Score {
        average(allies.iter().map(|ally| self.synergy(hero, *ally)))
    }

    /// Mean counter score of `hero` against the enemies, skipping unknown
    /// pairs; 0.5 when nothing is known or the list is empty.
    fn average_counter(&self, hero: HeroId, enemies: &[HeroId]) -> Score {
        average(enemies.iter().map(|enemy| self.counter(hero, *enemy)))
    }
}

fn average(scores: impl Iterator<Item = Option<Score>>) -> Score {
    let known = scores.flatten().collect::<Vec<Score>>();
    if known.is_empty() {
        0.5
    } else {
        known.iter().sum::<Score>() / known.len() as Score
    }
}
