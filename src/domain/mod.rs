pub mod matchlog;
pub mod models;
pub mod progress;
pub mod roster;
pub mod schedule;
pub mod validate;

pub use models::*;
