use super::allpick::AllPickDraft;
use super::captains::CaptainsDraft;
use super::engine::DraftEngine;
use serde::Deserialize;
use serde::Serialize;

/// Supported draft formats.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum DraftMode {
    /// Competitive format with the structured 24-turn pick/ban schedule.
    CaptainsMode,
    /// Unstructured format: alternating picks, no bans.
    AllPick,
}

impl DraftMode {
    /// The engine interpreting this mode's rules. Engines are stateless,
    /// so a single static instance serves every draft.
    pub fn engine(&self) -> &'static dyn DraftEngine {
        match self {
            Self::CaptainsMode => &CaptainsDraft,
            Self::AllPick => &AllPickDraft,
        }
    }
}

impl std::fmt::Display for DraftMode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::CaptainsMode => write!(f, "Captain's Mode"),
            Self::AllPick => write!(f, "All Pick"),
        }
    }
}

impl TryFrom<&str> for DraftMode {
    type Error = &'static str;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.to_ascii_lowercase().as_str() {
            "captains" | "cm" => Ok(Self::CaptainsMode),
            "allpick" | "ap" => Ok(Self::AllPick),
            _ => Err("unknown draft mode"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_returns_matching_engine() {
        assert!(DraftMode::CaptainsMode.engine().mode() == DraftMode::CaptainsMode);
        assert!(DraftMode::AllPick.engine().mode() == DraftMode::AllPick);
    }
}
