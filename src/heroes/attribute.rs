use colored::Colorize;
use serde::Deserialize;
use serde::Serialize;

/// Primary attribute of a hero.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Attribute {
    Strength,
    Agility,
    Intelligence,
    Universal,
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Strength => write!(f, "{}", "STR".red()),
            Self::Agility => write!(f, "{}", "AGI".green()),
            Self::Intelligence => write!(f, "{}", "INT".cyan()),
            Self::Universal => write!(f, "{}", "UNI".white()),
        }
    }
}
