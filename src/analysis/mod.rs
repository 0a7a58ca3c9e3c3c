pub mod winrate;
pub use winrate::*;
