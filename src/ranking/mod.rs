pub mod achievements;
pub mod catalog;
pub mod handlers;
pub mod rating;

pub use rating::{GameReport, MatchUpdate};
