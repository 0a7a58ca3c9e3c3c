use super::action::ActionKind;
use super::engine::ensure_available;
use super::engine::ensure_open;
use super::engine::DraftEngine;
use super::error::DraftError;
use super::mode::DraftMode;
use super::phase::DraftPhase;
use super::state::DraftState;
use super::team::Team;
use crate::heroes::Hero;
use crate::PICKS_PER_TEAM;
use std::sync::Arc;

/// All Pick: teams alternate picks starting with Radiant, no bans.
/// The phase reads as pick phase 1 throughout and the draft ends exactly
/// when both teams hold five picks.
pub struct AllPickDraft;

impl DraftEngine for AllPickDraft {
    fn mode(&self) -> DraftMode {
        DraftMode::AllPick
    }

    fn start(&self, pool: Vec<Arc<Hero>>, timer_enabled: bool) -> Result<DraftState, DraftError> {
        if pool.is_empty() {
            return Err(DraftError::EmptyPool);
        }
        Ok(DraftState::initial(
            DraftMode::AllPick,
            DraftPhase::Pick1,
            Team::Radiant,
            pool,
            timer_enabled,
            0,
        ))
    }

    fn pick(&self, state: &DraftState, hero: &Arc<Hero>) -> Result<DraftState, DraftError> {
        ensure_open(state)?;
        ensure_available(state, hero)?;
        let team = state.team().ok_or(DraftError::DraftComplete)?;
        log::debug!("turn {:>2}: {:?} picks {}", state.turn(), team, hero);
        let next = state.with_pick(team, hero);
        let done = next.pick_count(Team::Radiant) >= PICKS_PER_TEAM
            && next.pick_count(Team::Dire) >= PICKS_PER_TEAM;
        if done {
            Ok(next.with_turn(state.turn() + 1, DraftPhase::Completed, None))
        } else {
            Ok(next.with_turn(state.turn() + 1, DraftPhase::Pick1, Some(team.opponent())))
        }
    }

    /// There is no ban concept in this mode.
    fn ban(&self, state: &DraftState, hero: &Arc<Hero>) -> Result<DraftState, DraftError> {
        let _ = hero;
        Err(DraftError::PhaseMismatch {
            phase: state.phase(),
            attempted: ActionKind::Ban,
        })
    }
}
