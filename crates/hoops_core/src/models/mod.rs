pub mod person;
pub mod player;

pub use person::Person;
pub use player::{Player, Position};
