//! Error types and handling for the `PetTravel` service

use thiserror::Error;

/// Main error type for the `PetTravel` service
///
/// The rule evaluator itself never fails; these errors come from the
/// plumbing around it (configuration and form conversion).
#[derive(Error, Debug)]
pub enum PetTravelError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Form input that cannot be turned into a travel request
    #[error("Invalid input: {message}")]
    Validation { message: String },
}

impl PetTravelError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Whether the error was caused by the caller's input
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, PetTravelError::Validation { .. })
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            PetTravelError::Config { .. } => {
                "Configuration error. Please check your config file and environment.".to_string()
            }
            PetTravelError::Validation { message } => {
                format!("Invalid input: {message}")
            }
        }
    }
}
