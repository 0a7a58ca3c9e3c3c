pub mod component;
pub use component::*;

pub mod counter;
pub use counter::*;

pub mod engine;
pub use engine::*;

pub mod recommendation;
pub use recommendation::*;

pub mod role;
pub use role::*;

pub mod synergy;
pub use synergy::*;
