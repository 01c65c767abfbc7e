//! Travel plan model: the categorized advisory output of one evaluation

use serde::{Deserialize, Serialize};

/// Severity tag attached to every advisory message
///
/// `Error` is part of the vocabulary the renderer understands but no rule
/// emits it yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Ok,
    Warning,
    Info,
    Error,
}

/// One line of the checklist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvisoryMessage {
    pub text: String,
    pub status: Status,
}

impl AdvisoryMessage {
    #[must_use]
    pub fn new(status: Status, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            status,
        }
    }

    #[must_use]
    pub fn ok(text: impl Into<String>) -> Self {
        Self::new(Status::Ok, text)
    }

    #[must_use]
    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(Status::Warning, text)
    }

    #[must_use]
    pub fn info(text: impl Into<String>) -> Self {
        Self::new(Status::Info, text)
    }
}

/// The five output sequences, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Validations,
    TravelWindows,
    Documentation,
    AntiparasiticTreatment,
    AirportRules,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Validations,
        Section::TravelWindows,
        Section::Documentation,
        Section::AntiparasiticTreatment,
        Section::AirportRules,
    ];

    /// Heading used by the renderer
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Section::Validations => "Validaciones",
            Section::TravelWindows => "Ventanas de viaje",
            Section::Documentation => "Documentación",
            Section::AntiparasiticTreatment => "Tratamiento antiparasitario",
            Section::AirportRules => "Reglas del aeropuerto",
        }
    }
}

/// Result of evaluating a travel request
///
/// Each sequence keeps the order in which the rules produced its entries.
/// A sequence that does not apply to the request is left empty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelPlan {
    pub validations: Vec<AdvisoryMessage>,
    pub travel_windows: Vec<AdvisoryMessage>,
    pub documentation: Vec<AdvisoryMessage>,
    pub antiparasitic_treatment: Vec<AdvisoryMessage>,
    pub airport_rules: Vec<AdvisoryMessage>,
}

impl TravelPlan {
    #[must_use]
    pub fn section(&self, section: Section) -> &[AdvisoryMessage] {
        match section {
            Section::Validations => &self.validations,
            Section::TravelWindows => &self.travel_windows,
            Section::Documentation => &self.documentation,
            Section::AntiparasiticTreatment => &self.antiparasitic_treatment,
            Section::AirportRules => &self.airport_rules,
        }
    }

    /// True when no rule produced anything
    #[must_use]
    pub fn is_empty(&self) -> bool {
        Section::ALL
            .iter()
            .all(|section| self.section(*section).is_empty())
    }
}
