//! Player module: domain inputs, filter builder, repository and service.

pub mod domain;
pub mod filter;
pub mod repository;
pub mod repo;
pub mod service;

pub use domain::{NewPlayer, PlayerInput};
pub use filter::PlayerFilter;
pub use service::PlayerService;
