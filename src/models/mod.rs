//! Data models for the PetTravel service
//!
//! - Request: the form values handed to the evaluator
//! - Plan: the categorized, status-tagged checklist it produces

pub mod plan;
pub mod request;

// Re-export all public types for convenient access
pub use plan::{AdvisoryMessage, Section, Status, TravelPlan};
pub use request::{Airport, Destination, Species, TravelRequest, UnknownOption};
