use serde::Deserialize;
use serde::Serialize;

/// Base stats at level 1 plus per-level gains.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroAttributes {
    pub base_strength: f64,
    pub base_agility: f64,
    pub base_intelligence: f64,
    pub strength_gain: f64,
    pub agility_gain: f64,
    pub intelligence_gain: f64,
    pub move_speed: u32,
    pub armor: f64,
    pub attack_damage_min: u32,
    pub attack_damage_max: u32,
    pub attack_range: u32,
    pub attack_rate: f64,
}

impl Default for HeroAttributes {
    fn default() -> Self {
        Self {
            base_strength: 20.0,
            base_agility: 20.0,
            base_intelligence: 20.0,
            strength_gain: 2.0,
            agility_gain: 2.0,
            intelligence_gain: 2.0,
            move_speed: 300,
            armor: 0.0,
            attack_damage_min: 50,
            attack_damage_max: 60,
            attack_range: 150,
            attack_rate: 1.7,
        }
    }
}
