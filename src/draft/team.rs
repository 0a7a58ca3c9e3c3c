use colored::Colorize;
use serde::Deserialize;
use serde::Serialize;

/// One of the two drafting sides.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Team {
    Radiant,
    Dire,
}

impl Team {
    pub const fn opponent(&self) -> Self {
        match self {
            Self::Radiant => Self::Dire,
            Self::Dire => Self::Radiant,
        }
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Radiant => write!(f, "{}", "Radiant".green()),
            Self::Dire => write!(f, "{}", "Dire".red()),
        }
    }
}

impl TryFrom<&str> for Team {
    type Error = &'static str;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.to_ascii_lowercase().as_str() {
            "radiant" => Ok(Self::Radiant),
            "dire" => Ok(Self::Dire),
            _ => Err("unknown team"),
        }
    }
}
