use super::action::DraftAction;
use super::mode::DraftMode;
use super::phase::DraftPhase;
use super::team::Team;
use crate::heroes::Hero;
use crate::TURN_CLOCK;
use serde::Deserialize;
use serde::Serialize;
use std::sync::Arc;

/// An immutable snapshot of a draft in progress.
///
/// Every transition returns a new value; callers may retain old snapshots
/// for time travel or comparison. The five hero lists (available + two
/// pick lists + two ban lists) are insertion-ordered, pairwise disjoint,
/// and always union back to the universe passed at draft start.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftState {
    mode: DraftMode,
    phase: DraftPhase,
    /// Team on turn; `None` once the draft completes.
    team: Option<Team>,
    turn: usize,
    radiant_picks: Vec<Arc<Hero>>,
    dire_picks: Vec<Arc<Hero>>,
    radiant_bans: Vec<Arc<Hero>>,
    dire_bans: Vec<Arc<Hero>>,
    available: Vec<Arc<Hero>>,
    /// The full pool as passed at start, retained so undo can replay
    /// from an identical root.
    universe: Vec<Arc<Hero>>,
    timer_enabled: bool,
    /// Inert clock data; enforcement belongs to the caller, not this core.
    remaining_time: u32,
    radiant_reserve: u32,
    dire_reserve: u32,
    history: Vec<DraftAction>,
}

impl DraftState {
    /// Transition constructors are crate-internal; the engines are the only
    /// writers, so every snapshot a consumer holds came off a legal path.
    pub(crate) fn initial(
        mode: DraftMode,
        phase: DraftPhase,
        team: Team,
        pool: Vec<Arc<Hero>>,
        timer_enabled: bool,
        reserve: u32,
    ) -> Self {
        Self {
            mode,
            phase,
            team: Some(team),
            turn: 0,
            radiant_picks: Vec::new(),
            dire_picks: Vec::new(),
            radiant_bans: Vec::new(),
            dire_bans: Vec::new(),
            available: pool.clone(),
            universe: pool,
            timer_enabled,
            remaining_time: TURN_CLOCK,
            radiant_reserve: reserve,
            dire_reserve: reserve,
            history: Vec::new(),
        }
    }

    /// New snapshot with the hero moved from the pool into `team`'s picks.
    pub(crate) fn with_pick(&self, team: Team, hero: &Arc<Hero>) -> Self {
        let mut next = self.clone();
        match team {
            Team::Radiant => next.radiant_picks.push(hero.clone()),
            Team::Dire => next.dire_picks.push(hero.clone()),
        }
        next.available.retain(|h| h.id != hero.id);
        next.history
            .push(DraftAction::pick(team, hero.clone(), self.turn, self.phase));
        next
    }

    /// New snapshot with the hero moved from the pool into `team`'s bans.
    pub(crate) fn with_ban(&self, team: Team, hero: &Arc<Hero>) -> Self {
        let mut next = self.clone();
        match team {
            Team::Radiant => next.radiant_bans.push(hero.clone()),
            Team::Dire => next.dire_bans.push(hero.clone()),
        }
        next.available.retain(|h| h.id != hero.id);
        next.history
            .push(DraftAction::ban(team, hero.clone(), self.turn, self.phase));
        next
    }

    /// New snapshot advanced to the given schedule position, clock reset.
    pub(crate) fn with_turn(&self, turn: usize, phase: DraftPhase, team: Option<Team>) -> Self {
        let mut next = self.clone();
        next.turn = turn;
        next.phase = phase;
        next.team = team;
        next.remaining_time = TURN_CLOCK;
        next
    }

    pub fn mode(&self) -> DraftMode {
        self.mode
    }
    pub fn phase(&self) -> DraftPhase {
        self.phase
    }
    pub fn team(&self) -> Option<Team> {
        self.team
    }
    pub fn turn(&self) -> usize {
        self.turn
    }
    pub fn available(&self) -> &[Arc<Hero>] {
        &self.available
    }
    pub fn universe(&self) -> &[Arc<Hero>] {
        &self.universe
    }
    pub fn history(&self) -> &[DraftAction] {
        &self.history
    }
    pub fn timer_enabled(&self) -> bool {
        self.timer_enabled
    }
    pub fn remaining_time(&self) -> u32 {
        self.remaining_time
    }

    pub fn picks(&self, team: Team) -> &[Arc<Hero>] {
        match team {
            Team::Radiant => &self.radiant_picks,
            Team::Dire => &self.dire_picks,
        }
    }
    pub fn bans(&self, team: Team) -> &[Arc<Hero>] {
        match team {
            Team::Radiant => &self.radiant_bans,
            Team::Dire => &self.dire_bans,
        }
    }
    pub fn pick_count(&self, team: Team) -> usize {
        self.picks(team).len()
    }
    pub fn ban_count(&self, team: Team) -> usize {
        self.bans(team).len()
    }
    pub fn reserve(&self, team: Team) -> u32 {
        match team {
            Team::Radiant => self.radiant_reserve,
            Team::Dire => self.dire_reserve,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.phase == DraftPhase::Completed
    }
    pub fn is_available(&self, hero: &Hero) -> bool {
        self.available.iter().any(|h| h.id == hero.id)
    }
}

impl std::fmt::Display for DraftState {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let names = |heroes: &[Arc<Hero>]| {
            heroes
                .iter()
                .map(|h| h.localized_name.clone())
                .collect::<Vec<String>>()
                .join(", ")
        };
        match self.team {
            Some(team) => writeln!(f, "turn {:>2}  {}  {} to act", self.turn, self.phase, team)?,
            None => writeln!(f, "turn {:>2}  {}", self.turn, self.phase)?,
        }
        writeln!(
            f,
            "{} picks: {}",
            Team::Radiant,
            names(&self.radiant_picks)
        )?;
        writeln!(f, "{} picks: {}", Team::Dire, names(&self.dire_picks))?;
        if self.mode == DraftMode::CaptainsMode {
            writeln!(f, "{} bans:  {}", Team::Radiant, names(&self.radiant_bans))?;
            writeln!(f, "{} bans:  {}", Team::Dire, names(&self.dire_bans))?;
        }
        write!(f, "{} heroes available", self.available.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn pool(n: u32) -> Vec<Arc<Hero>> {
        (1..=n)
            .map(|i| Arc::new(Hero::named(i, &format!("hero_{i}"), &format!("Hero {i}"))))
            .collect()
    }

    fn fresh(n: u32) -> DraftState {
        DraftState::initial(
            DraftMode::CaptainsMode,
            DraftPhase::Ban1,
            Team::Radiant,
            pool(n),
            false,
            130,
        )
    }

    #[test]
    fn pick_moves_hero_out_of_pool() {
        let state = fresh(5);
        let hero = state.available()[0].clone();
        let next = state.with_pick(Team::Radiant, &hero);
        assert!(next.picks(Team::Radiant) == [hero.clone()]);
        assert!(!next.is_available(&hero));
        assert!(next.history().len() == 1);
        // the prior snapshot is untouched
        assert!(state.is_available(&hero));
        assert!(state.history().is_empty());
    }

    #[test]
    fn ban_moves_hero_out_of_pool() {
        let state = fresh(5);
        let hero = state.available()[2].clone();
        let next = state.with_ban(Team::Dire, &hero);
        assert!(next.bans(Team::Dire) == [hero.clone()]);
        assert!(next.picks(Team::Dire).is_empty());
        assert!(!next.is_available(&hero));
    }

    #[test]
    fn lists_stay_disjoint_and_union_to_universe() {
        let state = fresh(6);
        let a = state.available()[0].clone();
        let b = state.available()[1].clone();
        let state = state.with_ban(Team::Radiant, &a).with_turn(
            1,
            DraftPhase::Ban1,
            Some(Team::Dire),
        );
        let state = state.with_pick(Team::Dire, &b).with_turn(
            2,
            DraftPhase::Pick1,
            Some(Team::Radiant),
        );
        let mut ids = HashSet::new();
        let mut total = 0;
        for list in [
            state.available(),
            state.picks(Team::Radiant),
            state.picks(Team::Dire),
            state.bans(Team::Radiant),
            state.bans(Team::Dire),
        ] {
            total += list.len();
            ids.extend(list.iter().map(|h| h.id));
        }
        assert!(total == state.universe().len());
        assert!(ids.len() == state.universe().len());
    }

    #[test]
    fn advancing_resets_the_clock() {
        let state = fresh(3);
        let next = state.with_turn(1, DraftPhase::Ban1, Some(Team::Dire));
        assert!(next.remaining_time() == crate::TURN_CLOCK);
        assert!(next.turn() == 1);
        assert!(next.team() == Some(Team::Dire));
    }
}
