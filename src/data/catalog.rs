use super::source::HeroSource;
use crate::heroes::Attribute;
use crate::heroes::Hero;
use crate::heroes::Role;
use crate::Arbitrary;
use crate::HeroId;
use rand::seq::SliceRandom;
use std::collections::HashMap;
use std::sync::Arc;

/// In-memory hero catalog, loadable from a JSON hero list.
#[derive(Debug, Clone, Default)]
pub struct HeroCatalog {
    heroes: Vec<Arc<Hero>>,
    index: HashMap<HeroId, usize>,
}

impl From<Vec<Hero>> for HeroCatalog {
    fn from(heroes: Vec<Hero>) -> Self {
        let heroes = heroes.into_iter().map(Arc::new).collect::<Vec<Arc<Hero>>>();
        let index = heroes
            .iter()
            .enumerate()
            .map(|(i, hero)| (hero.id, i))
            .collect();
        Self { heroes, index }
    }
}

impl HeroCatalog {
    /// Parse a catalog from a JSON array of hero records.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let heroes = serde_json::from_str::<Vec<Hero>>(json)?;
        log::info!("loaded {} heroes", heroes.len());
        Ok(Self::from(heroes))
    }

    pub fn heroes(&self) -> &[Arc<Hero>] {
        &self.heroes
    }
}

impl HeroSource for HeroCatalog {
    fn all(&self) -> Vec<Arc<Hero>> {
        self.heroes.clone()
    }
    fn by_id(&self, id: HeroId) -> Option<Arc<Hero>> {
        self.index.get(&id).map(|i| self.heroes[*i].clone())
    }
    fn by_name(&self, name: &str) -> Option<Arc<Hero>> {
        self.heroes.iter().find(|h| h.name == name).cloned()
    }
    fn by_attribute(&self, attribute: Attribute) -> Vec<Arc<Hero>> {
        self.heroes
            .iter()
            .filter(|h| h.primary_attribute == attribute)
            .cloned()
            .collect()
    }
    fn by_role(&self, role: Role) -> Vec<Arc<Hero>> {
        self.heroes
            .iter()
            .filter(|h| h.has_role(role))
            .cloned()
            .collect()
    }
    fn search(&self, query: &str) -> Vec<Arc<Hero>> {
        let query = query.to_lowercase();
        self.heroes
            .iter()
            .filter(|h| h.localized_name.to_lowercase().contains(&query))
            .cloned()
            .collect()
    }
    fn count(&self) -> usize {
        self.heroes.len()
    }
}

impl Arbitrary for HeroCatalog {
    /// A shuffled synthetic roster of 24 heroes covering every role and
    /// attribute, enough for a full Captain's Mode rehearsal.
    fn random() -> Self {
        let attributes = [
            Attribute::Strength,
            Attribute::Agility,
            Attribute::Intelligence,
            Attribute::Universal,
        ];
        let roles = Role::all();
        let mut heroes = (0..24u32)
            .map(|i| {
                let primary = roles[i as usize % roles.len()];
                let secondary = roles[(i as usize + 3) % roles.len()];
                Hero::named(i + 1, &format!("hero_{:02}", i + 1), &format!("Hero {:02}", i + 1))
                    .with_roles(&[primary, secondary])
                    .with_attribute(attributes[i as usize % attributes.len()])
            })
            .collect::<Vec<Hero>>();
        heroes.shuffle(&mut rand::rng());
        Self::from(heroes)
    }
}
