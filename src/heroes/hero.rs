use super::ability::Ability;
use super::attack::AttackType;
use super::attribute::Attribute;
use super::attributes::HeroAttributes;
use super::role::Role;
use crate::HeroId;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;

/// A hero from the static catalog.
///
/// Never mutated after construction; draft snapshots share heroes by
/// reference ([`std::sync::Arc`]). Equality and hashing go by id alone,
/// so two records with the same id compare equal regardless of payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hero {
    pub id: HeroId,
    /// Internal name, e.g. "antimage".
    pub name: String,
    /// Display name, e.g. "Anti-Mage".
    pub localized_name: String,
    pub primary_attribute: Attribute,
    pub attack_type: AttackType,
    #[serde(default)]
    pub roles: Vec<Role>,
    /// Lane position (1-5) to observed frequency.
    #[serde(default)]
    pub positions: BTreeMap<u8, f64>,
    #[serde(default)]
    pub attributes: HeroAttributes,
    #[serde(default)]
    pub abilities: Vec<Ability>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub icon_url: Option<String>,
}

impl Hero {
    /// Minimal record with default stats, no roles, no abilities.
    pub fn named(id: HeroId, name: &str, localized: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            localized_name: localized.to_string(),
            primary_attribute: Attribute::Universal,
            attack_type: AttackType::Melee,
            roles: Vec::new(),
            positions: BTreeMap::new(),
            attributes: HeroAttributes::default(),
            abilities: Vec::new(),
            image_url: None,
            icon_url: None,
        }
    }

    pub fn with_roles(mut self, roles: &[Role]) -> Self {
        self.roles = roles.to_vec();
        self
    }

    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.primary_attribute = attribute;
        self
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// Highest-frequency lane position, defaulting to mid.
    pub fn primary_position(&self) -> u8 {
        self.positions
            .iter()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(position, _)| *position)
            .unwrap_or(3)
    }
}

impl PartialEq for Hero {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
impl Eq for Hero {}

impl std::hash::Hash for Hero {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Display for Hero {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.primary_attribute, self.localized_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_goes_by_id() {
        let a = Hero::named(1, "antimage", "Anti-Mage");
        let b = Hero::named(1, "antimage", "Anti-Mage").with_roles(&[Role::Carry]);
        let c = Hero::named(2, "axe", "Axe");
        assert!(a == b);
        assert!(a != c);
    }

    #[test]
    fn primary_position_prefers_frequency() {
        let mut hero = Hero::named(1, "antimage", "Anti-Mage");
        assert!(hero.primary_position() == 3);
        hero.positions.insert(1, 0.8);
        hero.positions.insert(2, 0.2);
        assert!(hero.primary_position() == 1);
    }
}
