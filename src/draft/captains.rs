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
use crate::RESERVE_CLOCK;
use std::sync::Arc;

/// One entry of the fixed turn schedule.
#[derive(Debug, Clone, Copy)]
pub struct Slot {
    pub team: Team,
    pub phase: DraftPhase,
    pub kind: ActionKind,
}

const fn slot(team: Team, phase: DraftPhase, kind: ActionKind) -> Slot {
    Slot { team, phase, kind }
}

use ActionKind::Ban;
use ActionKind::Pick;
use DraftPhase::*;
use Team::Dire as B;
use Team::Radiant as A;

/// The official Captain's Mode sequence as data. Indexing by turn number
/// is the only control flow the engine needs; rule changes land here.
///
/// Ban1 ABBABBA, Pick1 AB, Ban2 AAB, Pick2 BAABBA, Ban3 ABBA, Pick3 AB.
/// 14 bans, 10 picks, 5 picks per team. "A" is the first-acting team.
pub const SCHEDULE: [Slot; 24] = [
    slot(A, Ban1, Ban),
    slot(B, Ban1, Ban),
    slot(B, Ban1, Ban),
    slot(A, Ban1, Ban),
    slot(B, Ban1, Ban),
    slot(B, Ban1, Ban),
    slot(A, Ban1, Ban),
    slot(A, Pick1, Pick),
    slot(B, Pick1, Pick),
    slot(A, Ban2, Ban),
    slot(A, Ban2, Ban),
    slot(B, Ban2, Ban),
    slot(B, Pick2, Pick),
    slot(A, Pick2, Pick),
    slot(A, Pick2, Pick),
    slot(B, Pick2, Pick),
    slot(B, Pick2, Pick),
    slot(A, Pick2, Pick),
    slot(A, Ban3, Ban),
    slot(B, Ban3, Ban),
    slot(B, Ban3, Ban),
    slot(A, Ban3, Ban),
    slot(A, Pick3, Pick),
    slot(B, Pick3, Pick),
];

/// Captain's Mode: the structured 24-turn schedule above.
pub struct CaptainsDraft;

impl CaptainsDraft {
    fn advance(&self, state: DraftState) -> DraftState {
        let next = state.turn() + 1;
        match SCHEDULE.get(next) {
            Some(slot) => state.with_turn(next, slot.phase, Some(slot.team)),
            None => state.with_turn(next, DraftPhase::Completed, None),
        }
    }
}

impl DraftEngine for CaptainsDraft {
    fn mode(&self) -> DraftMode {
        DraftMode::CaptainsMode
    }

    fn start(&self, pool: Vec<Arc<Hero>>, timer_enabled: bool) -> Result<DraftState, DraftError> {
        if pool.is_empty() {
            return Err(DraftError::EmptyPool);
        }
        let first = SCHEDULE[0];
        Ok(DraftState::initial(
            DraftMode::CaptainsMode,
            first.phase,
            first.team,
            pool,
            timer_enabled,
            RESERVE_CLOCK,
        ))
    }

    fn pick(&self, state: &DraftState, hero: &Arc<Hero>) -> Result<DraftState, DraftError> {
        ensure_open(state)?;
        ensure_available(state, hero)?;
        let slot = *SCHEDULE.get(state.turn()).ok_or(DraftError::DraftComplete)?;
        if slot.kind == ActionKind::Ban {
            return Err(DraftError::PhaseMismatch {
                phase: state.phase(),
                attempted: ActionKind::Pick,
            });
        }
        log::debug!("turn {:>2}: {:?} picks {}", state.turn(), slot.team, hero);
        Ok(self.advance(state.with_pick(slot.team, hero)))
    }

    fn ban(&self, state: &DraftState, hero: &Arc<Hero>) -> Result<DraftState, DraftError> {
        ensure_open(state)?;
        ensure_available(state, hero)?;
        let slot = *SCHEDULE.get(state.turn()).ok_or(DraftError::DraftComplete)?;
        if slot.kind == ActionKind::Pick {
            return Err(DraftError::PhaseMismatch {
                phase: state.phase(),
                attempted: ActionKind::Ban,
            });
        }
        log::debug!("turn {:>2}: {:?} bans {}", state.turn(), slot.team, hero);
        Ok(self.advance(state.with_ban(slot.team, hero)))
    }
}
