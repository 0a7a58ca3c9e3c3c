use serde::Deserialize;
use serde::Serialize;

/// Phases of a structured draft, in schedule order.
///
/// All Pick only ever reports [`Self::Pick1`] or [`Self::Completed`].
/// [`Self::Completed`] is terminal and classifies as neither ban nor pick.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum DraftPhase {
    Ban1,
    Pick1,
    Ban2,
    Pick2,
    Ban3,
    Pick3,
    Completed,
}

impl DraftPhase {
    pub const fn is_ban(&self) -> bool {
        matches!(self, Self::Ban1 | Self::Ban2 | Self::Ban3)
    }
    pub const fn is_pick(&self) -> bool {
        matches!(self, Self::Pick1 | Self::Pick2 | Self::Pick3)
    }
    /// Late pick phases, where duplicate core roles stop being tolerated.
    pub const fn is_late(&self) -> bool {
        matches!(self, Self::Pick2 | Self::Pick3)
    }
}

impl std::fmt::Display for DraftPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Ban1 => write!(f, "ban phase 1"),
            Self::Pick1 => write!(f, "pick phase 1"),
            Self::Ban2 => write!(f, "ban phase 2"),
            Self::Pick2 => write!(f, "pick phase 2"),
            Self::Ban3 => write!(f, "ban phase 3"),
            Self::Pick3 => write!(f, "pick phase 3"),
            Self::Completed => write!(f, "completed draft"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completed_is_neither_ban_nor_pick() {
        assert!(!DraftPhase::Completed.is_ban());
        assert!(!DraftPhase::Completed.is_pick());
    }

    #[test]
    fn classification_partitions_phases() {
        for phase in [DraftPhase::Ban1, DraftPhase::Ban2, DraftPhase::Ban3] {
            assert!(phase.is_ban() && !phase.is_pick());
        }
        for phase in [DraftPhase::Pick1, DraftPhase::Pick2, DraftPhase::Pick3] {
            assert!(phase.is_pick() && !phase.is_ban());
        }
        assert!(!DraftPhase::Pick1.is_late());
        assert!(DraftPhase::Pick2.is_late());
        assert!(DraftPhase::Pick3.is_late());
    }
}
