use super::action::ActionKind;
use super::phase::DraftPhase;

/// Failure conditions reported by the draft engines.
///
/// All variants are synchronous and non-fatal: the snapshot a failed call
/// was given remains valid, so the caller may retry with corrected input.
#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
pub enum DraftError {
    #[error("cannot start a draft with an empty hero pool")]
    EmptyPool,
    #[error("draft is already complete")]
    DraftComplete,
    #[error("hero is not available: {0}")]
    HeroUnavailable(String),
    #[error("cannot {attempted} during {phase}")]
    PhaseMismatch {
        phase: DraftPhase,
        attempted: ActionKind,
    },
    #[error("no actions to undo")]
    NothingToUndo,
    #[error("redo is not supported")]
    RedoUnsupported,
}
