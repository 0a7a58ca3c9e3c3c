use super::action::ActionKind;
use super::error::DraftError;
use super::mode::DraftMode;
use super::phase::DraftPhase;
use super::state::DraftState;
use super::team::Team;
use crate::heroes::Hero;
use std::sync::Arc;

/// Mode-specific draft rules, one implementation per [`DraftMode`].
///
/// Engines are pure: every method either returns a fresh snapshot or a
/// [`DraftError`], and the snapshot passed in is never touched. The caller
/// serializes pick/ban/undo calls against one logical draft itself.
pub trait DraftEngine: Sync {
    fn mode(&self) -> DraftMode;

    /// Begin a draft over the given hero pool.
    fn start(&self, pool: Vec<Arc<Hero>>, timer_enabled: bool) -> Result<DraftState, DraftError>;

    /// Pick the hero for the team on turn.
    fn pick(&self, state: &DraftState, hero: &Arc<Hero>) -> Result<DraftState, DraftError>;

    /// Ban the hero for the team on turn.
    fn ban(&self, state: &DraftState, hero: &Arc<Hero>) -> Result<DraftState, DraftError>;

    /// Rewind to the snapshot preceding the last recorded action by
    /// replaying history from a fresh start. O(turns), exact.
    fn undo(&self, state: &DraftState) -> Result<DraftState, DraftError> {
        if state.history().is_empty() {
            return Err(DraftError::NothingToUndo);
        }
        let mut fresh = self.start(state.universe().to_vec(), state.timer_enabled())?;
        for action in &state.history()[..state.history().len() - 1] {
            fresh = match action.kind {
                ActionKind::Pick => self.pick(&fresh, &action.hero)?,
                ActionKind::Ban => self.ban(&fresh, &action.hero)?,
            };
        }
        Ok(fresh)
    }

    /// Unsupported in every mode; always fails.
    fn redo(&self, state: &DraftState) -> Result<DraftState, DraftError> {
        let _ = state;
        Err(DraftError::RedoUnsupported)
    }

    fn current_team(&self, state: &DraftState) -> Option<Team> {
        state.team()
    }
    fn current_phase(&self, state: &DraftState) -> DraftPhase {
        state.phase()
    }
    fn is_ban_phase(&self, state: &DraftState) -> bool {
        state.phase().is_ban()
    }
    fn is_complete(&self, state: &DraftState) -> bool {
        state.is_complete()
    }
}

/// Draft must still be running.
pub(super) fn ensure_open(state: &DraftState) -> Result<(), DraftError> {
    if state.is_complete() {
        Err(DraftError::DraftComplete)
    } else {
        Ok(())
    }
}

/// Hero must still be in the pool.
pub(super) fn ensure_available(state: &DraftState, hero: &Hero) -> Result<(), DraftError> {
    if state.is_available(hero) {
        Ok(())
    } else {
        Err(DraftError::HeroUnavailable(hero.localized_name.clone()))
    }
}
