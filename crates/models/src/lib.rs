//! Persistence model for player records: the sea-orm entity, its closed
//! enumerations, field validation and the level calculator.

pub mod errors;
pub mod db;
pub mod level;
pub mod player;
pub mod validation;

#[cfg(test)]
mod tests;
