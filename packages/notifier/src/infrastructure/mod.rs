//! Infrastructure layer: concrete adapters for the domain ports.

pub mod campfire;
pub mod dto;

pub use campfire::CampfireClient;
