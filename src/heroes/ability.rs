use serde::Deserialize;
use serde::Serialize;

/// Static metadata for one hero ability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ability {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub kind: AbilityKind,
    #[serde(default)]
    pub damage: Option<DamageType>,
    /// Cooldown per skill level, seconds.
    #[serde(default)]
    pub cooldown: Vec<f64>,
    /// Mana cost per skill level.
    #[serde(default)]
    pub mana_cost: Vec<u32>,
}

#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum AbilityKind {
    Basic,
    Ultimate,
    Innate,
}

#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum DamageType {
    Physical,
    Magical,
    Pure,
}

impl Ability {
    /// A generic levelable nuke, handy as filler in synthetic rosters.
    pub fn basic(id: u32, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            description: String::new(),
            kind: AbilityKind::Basic,
            damage: Some(DamageType::Magical),
            cooldown: vec![10.0, 9.0, 8.0, 7.0],
            mana_cost: vec![100, 110, 120, 130],
        }
    }
}

impl std::fmt::Display for Ability {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
