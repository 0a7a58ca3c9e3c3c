pub mod catalog;
pub use catalog::*;

pub mod matchups;
pub use matchups::*;

pub mod source;
pub use source::*;
