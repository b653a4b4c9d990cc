//! Core data models for the pick-two engine.

mod game;
mod ids;
mod league;
mod outcome;
mod pick;
mod standings;
mod team;

pub use game::*;
pub use ids::*;
pub use league::*;
pub use outcome::*;
pub use pick::*;
pub use standings::*;
pub use team::*;
