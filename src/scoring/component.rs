use crate::Score;
use serde::Deserialize;
use serde::Serialize;

/// Which signal produced a component value.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum ComponentKind {
    Synergy,
    Counter,
    Role,
    Meta,
    Personal,
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Synergy => write!(f, "synergy"),
            Self::Counter => write!(f, "counter"),
            Self::Role => write!(f, "role"),
            Self::Meta => write!(f, "meta"),
            Self::Personal => write!(f, "personal"),
        }
    }
}

/// One bounded [0, 1] scoring signal with its rationale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub kind: ComponentKind,
    pub value: Score,
    pub detail: String,
}

impl ScoreComponent {
    pub fn synergy(value: Score, detail: impl Into<String>) -> Self {
        Self {
            kind: ComponentKind::Synergy,
            value,
            detail: detail.into(),
        }
    }
    pub fn counter(value: Score, detail: impl Into<String>) -> Self {
        Self {
            kind: ComponentKind::Counter,
            value,
            detail: detail.into(),
        }
    }
    pub fn role(value: Score, detail: impl Into<String>) -> Self {
        Self {
            kind: ComponentKind::Role,
            value,
            detail: detail.into(),
        }
    }
    pub fn meta(value: Score, detail: impl Into<String>) -> Self {
        Self {
            kind: ComponentKind::Meta,
            value,
            detail: detail.into(),
        }
    }
}

impl std::fmt::Display for ScoreComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {:.2} ({})", self.kind, self.value, self.detail)
    }
}
