pub mod action;
pub use action::*;

pub mod allpick;
pub use allpick::*;

pub mod captains;
pub use captains::*;

pub mod engine;
pub use engine::*;

pub mod error;
pub use error::*;

pub mod mode;
pub use mode::*;

pub mod phase;
pub use phase::*;

pub mod state;
pub use state::*;

pub mod team;
pub use team::*;
