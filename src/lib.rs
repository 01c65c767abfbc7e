//! `PetTravel` - deadline checklist for international pet travel
//!
//! This library evaluates a pet's species, destination and key dates against
//! EU pet passport and USA import rules, and produces a categorized list of
//! status-tagged advice. It also carries the small HTTP surface the form
//! frontend talks to.

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod render;
pub mod rules;
pub mod web;

// Re-export core types for public API
pub use config::PetTravelConfig;
pub use error::PetTravelError;
pub use models::{AdvisoryMessage, Airport, Destination, Section, Species, Status, TravelPlan, TravelRequest};
pub use render::render_text;
pub use rules::evaluate;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
