pub mod ability;
pub use ability::*;

pub mod attack;
pub use attack::*;

pub mod attribute;
pub use attribute::*;

pub mod attributes;
pub use attributes::*;

pub mod hero;
pub use hero::*;

pub mod role;
pub use role::*;
