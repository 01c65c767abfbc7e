//! Eligibility rule evaluator
//!
//! Maps a [`TravelRequest`] to a [`TravelPlan`]. Evaluation is pure: the
//! same request always produces the same plan, and nothing is shared between
//! runs. Branch selection is a fixed, ordered table of rules; the first rule
//! whose predicate matches fills the plan and the rest are skipped.
//!
//! Policy problems (dates too close together, a puppy that is too young)
//! never fail the evaluation. They show up as [`Status::Warning`] entries.

pub mod airport;
pub mod calendar;
pub mod eu;
pub mod usa;

use chrono::NaiveDate;

use crate::models::{AdvisoryMessage, Airport, Destination, Species, TravelPlan, TravelRequest};

/// Minimum days between rabies vaccination and blood collection
pub const MIN_VACCINE_TO_BLOOD_DAYS: i64 = 30;

/// Request values after the precondition check: every date is present
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleContext {
    pub species: Option<Species>,
    pub destination: Option<Destination>,
    pub arrival_airport: Option<Airport>,
    pub weight_kg: f64,
    pub birth: NaiveDate,
    pub vaccination: NaiveDate,
    pub blood_collection: NaiveDate,
    pub travel: NaiveDate,
}

impl RuleContext {
    /// `None` when any of the four dates is missing
    #[must_use]
    pub fn from_request(request: &TravelRequest) -> Option<Self> {
        Some(Self {
            species: request.species,
            destination: request.destination,
            arrival_airport: request.arrival_airport,
            weight_kg: request.weight_kg,
            birth: request.birth_date?,
            vaccination: request.vaccination_date?,
            blood_collection: request.blood_collection_date?,
            travel: request.travel_date?,
        })
    }

    /// Signed days from vaccination to blood collection
    #[must_use]
    pub fn vaccine_to_blood_days(&self) -> i64 {
        calendar::days_between(self.vaccination, self.blood_collection)
    }
}

/// One row of the decision table
pub struct Rule {
    pub name: &'static str,
    pub applies: fn(&RuleContext) -> bool,
    pub produce: fn(&RuleContext, &mut TravelPlan),
}

/// Decision table, checked in order
pub const RULES: &[Rule] = &[
    Rule {
        name: "eu_pet_passport",
        applies: eu::applies,
        produce: eu::produce,
    },
    Rule {
        name: "usa_dog_import",
        applies: usa::applies,
        produce: usa::produce,
    },
];

/// Evaluate a travel request against the decision table
#[tracing::instrument(level = "debug", skip_all, fields(species = ?request.species, destination = ?request.destination))]
#[must_use]
pub fn evaluate(request: &TravelRequest) -> TravelPlan {
    let mut plan = TravelPlan::default();

    let Some(context) = RuleContext::from_request(request) else {
        tracing::debug!("Request is missing dates, nothing to evaluate");
        return plan;
    };

    match RULES.iter().find(|rule| (rule.applies)(&context)) {
        Some(rule) => {
            tracing::debug!(rule = rule.name, "Rule matched");
            (rule.produce)(&context, &mut plan);
        }
        None => tracing::debug!("No rule applies to this request"),
    }

    plan
}

/// Blood sample taken less than 30 days after the rabies vaccine
pub(crate) fn blood_test_too_early(context: &RuleContext) -> AdvisoryMessage {
    AdvisoryMessage::warning(format!(
        "La extracción de sangre ({}) debe realizarse al menos 30 días después de la vacunación antirrábica ({}).",
        calendar::format_date(context.blood_collection),
        calendar::format_date(context.vaccination)
    ))
}

pub(crate) fn blood_test_confirmed(context: &RuleContext) -> AdvisoryMessage {
    AdvisoryMessage::ok(format!(
        "Extracción de sangre el {}, al menos 30 días después de la vacunación.",
        calendar::format_date(context.blood_collection)
    ))
}

/// Shared template for the earliest-travel-date echo
pub(crate) fn planned_travel_check(travel: NaiveDate, earliest: NaiveDate) -> AdvisoryMessage {
    if travel < earliest {
        AdvisoryMessage::warning(format!(
            "La fecha de viaje prevista ({}) es anterior a la fecha mínima permitida ({}).",
            calendar::format_date(travel),
            calendar::format_date(earliest)
        ))
    } else {
        AdvisoryMessage::ok(format!(
            "Fecha de viaje prevista: {}.",
            calendar::format_date(travel)
        ))
    }
}
