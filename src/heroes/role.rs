use serde::Deserialize;
use serde::Serialize;

/// Role tags attached to a hero in the static catalog.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Role {
    Carry,
    Support,
    Nuker,
    Initiator,
    Disabler,
    Escape,
    Durable,
    Pusher,
}

impl Role {
    /// The coverage vocabulary a complete lineup is measured against.
    pub const CORE: [Self; 5] = [
        Self::Carry,
        Self::Nuker,
        Self::Initiator,
        Self::Disabler,
        Self::Support,
    ];

    pub const fn all() -> &'static [Self] {
        &[
            Self::Carry,
            Self::Support,
            Self::Nuker,
            Self::Initiator,
            Self::Disabler,
            Self::Escape,
            Self::Durable,
            Self::Pusher,
        ]
    }

    pub fn is_core(&self) -> bool {
        Self::CORE.contains(self)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Carry => write!(f, "Carry"),
            Self::Support => write!(f, "Support"),
            Self::Nuker => write!(f, "Nuker"),
            Self::Initiator => write!(f, "Initiator"),
            Self::Disabler => write!(f, "Disabler"),
            Self::Escape => write!(f, "Escape"),
            Self::Durable => write!(f, "Durable"),
            Self::Pusher => write!(f, "Pusher"),
        }
    }
}

impl TryFrom<&str> for Role {
    type Error = &'static str;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.to_ascii_lowercase().as_str() {
            "carry" => Ok(Self::Carry),
            "support" => Ok(Self::Support),
            "nuker" => Ok(Self::Nuker),
            "initiator" => Ok(Self::Initiator),
            "disabler" => Ok(Self::Disabler),
            "escape" => Ok(Self::Escape),
            "durable" => Ok(Self::Durable),
            "pusher" => Ok(Self::Pusher),
            _ => Err("unknown role"),
        }
    }
}
