//! Campfire adapter for the `ChatService` port.

mod client;

pub use client::CampfireClient;
