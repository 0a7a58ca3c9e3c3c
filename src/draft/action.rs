use super::phase::DraftPhase;
use super::team::Team;
use crate::heroes::Hero;
use colored::Colorize;
use serde::Deserialize;
use serde::Serialize;
use std::sync::Arc;

/// Whether an action removes a hero into a lineup or out of the draft.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum ActionKind {
    Pick,
    Ban,
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Pick => write!(f, "pick"),
            Self::Ban => write!(f, "ban"),
        }
    }
}

/// One applied pick or ban. Append-only; the ordered sequence of these
/// is the draft's history and the sole input to undo-by-replay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftAction {
    pub kind: ActionKind,
    pub team: Team,
    pub hero: Arc<Hero>,
    /// Zero-based position in the schedule at which this action landed.
    pub turn: usize,
    pub phase: DraftPhase,
    pub at: jiff::Timestamp,
}

impl DraftAction {
    pub fn pick(team: Team, hero: Arc<Hero>, turn: usize, phase: DraftPhase) -> Self {
        Self {
            kind: ActionKind::Pick,
            team,
            hero,
            turn,
            phase,
            at: jiff::Timestamp::now(),
        }
    }

    pub fn ban(team: Team, hero: Arc<Hero>, turn: usize, phase: DraftPhase) -> Self {
        Self {
            kind: ActionKind::Ban,
            team,
            hero,
            turn,
            phase,
            at: jiff::Timestamp::now(),
        }
    }
}

impl std::fmt::Display for DraftAction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.kind {
            ActionKind::Pick => write!(
                f,
                "{:>2} {} {} {}",
                self.turn,
                self.team,
                "PICK".green(),
                self.hero.localized_name
            ),
            ActionKind::Ban => write!(
                f,
                "{:>2} {} {} {}",
                self.turn,
                self.team,
                "BAN ".red(),
                self.hero.localized_name
            ),
        }
    }
}
