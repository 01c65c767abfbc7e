use axum::{
    Router,
    extract::rejection::JsonRejection,
    http::{StatusCode, header},
    response::{IntoResponse, Json},
    routing::{get, post},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    PetTravelError, render,
    models::{Airport, Destination, Species, TravelPlan, TravelRequest},
    rules,
};

/// Date formats accepted from the form, ISO first
const FORM_DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%d/%m/%Y"];

/// Raw form payload as posted by the frontend
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlanForm {
    pub species: Option<String>,
    pub destination: Option<String>,
    pub arrival_airport: Option<String>,
    pub weight_kg: Option<f64>,
    pub birth_date: Option<String>,
    pub vaccination_date: Option<String>,
    pub blood_collection_date: Option<String>,
    pub travel_date: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiOptions {
    pub species: Vec<String>,
    pub destinations: Vec<String>,
    pub airports: Vec<String>,
}

#[derive(Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_date(field: &str, value: Option<&str>) -> Result<Option<NaiveDate>, PetTravelError> {
    let Some(value) = non_blank(value) else {
        return Ok(None);
    };

    FORM_DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
        .map(Some)
        .ok_or_else(|| PetTravelError::validation(format!("{field} '{value}' is not a valid date")))
}

/// Unknown selections fall through to "no rule applies" instead of failing
fn parse_selection<T: std::str::FromStr>(field: &str, value: Option<&str>) -> Option<T> {
    let value = non_blank(value)?;
    let parsed = value.parse().ok();
    if parsed.is_none() {
        tracing::warn!(field, value, "Ignoring unknown form selection");
    }
    parsed
}

fn parse_airport(value: Option<&str>) -> Result<Option<Airport>, PetTravelError> {
    match non_blank(value) {
        None => Ok(None),
        Some(v) if v.eq_ignore_ascii_case(Airport::NOT_SELECTED) => Ok(None),
        Some(v) => v
            .parse()
            .map(Some)
            .map_err(|e| PetTravelError::validation(format!("arrivalAirport: {e}"))),
    }
}

fn parse_weight(value: Option<f64>) -> Result<f64, PetTravelError> {
    match value {
        None => Ok(0.0),
        Some(w) if w.is_finite() && w >= 0.0 => Ok(w),
        Some(w) => Err(PetTravelError::validation(format!(
            "weightKg must be a non-negative number, got {w}"
        ))),
    }
}

impl TryFrom<PlanForm> for TravelRequest {
    type Error = PetTravelError;

    fn try_from(form: PlanForm) -> Result<Self, Self::Error> {
        Ok(TravelRequest {
            species: parse_selection::<Species>("species", form.species.as_deref()),
            destination: parse_selection::<Destination>("destination", form.destination.as_deref()),
            arrival_airport: parse_airport(form.arrival_airport.as_deref())?,
            weight_kg: parse_weight(form.weight_kg)?,
            birth_date: parse_date("birthDate", form.birth_date.as_deref())?,
            vaccination_date: parse_date("vaccinationDate", form.vaccination_date.as_deref())?,
            blood_collection_date: parse_date(
                "bloodCollectionDate",
                form.blood_collection_date.as_deref(),
            )?,
            travel_date: parse_date("travelDate", form.travel_date.as_deref())?,
        })
    }
}

fn reject(err: PetTravelError) -> (StatusCode, Json<ApiError>) {
    let status = if err.is_client_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    tracing::warn!(%status, "Rejecting plan request: {err}");
    (
        status,
        Json(ApiError {
            error: err.user_message(),
        }),
    )
}

/// Malformed or mistyped bodies get the same 400 JSON error as invalid values.
/// An oversized body keeps its 413.
fn reject_body(rejection: JsonRejection) -> (StatusCode, Json<ApiError>) {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        tracing::warn!("Rejecting oversized plan request");
        return (
            rejection.status(),
            Json(ApiError {
                error: rejection.body_text(),
            }),
        );
    }
    reject(PetTravelError::validation(rejection.body_text()))
}

fn evaluate_form(
    payload: Result<Json<PlanForm>, JsonRejection>,
) -> Result<TravelPlan, (StatusCode, Json<ApiError>)> {
    let Json(form) = payload.map_err(reject_body)?;
    let request = TravelRequest::try_from(form).map_err(reject)?;
    Ok(rules::evaluate(&request))
}

pub fn router() -> Router {
    Router::new()
        .route("/options", get(get_options))
        .route("/plan", post(create_plan))
        .route("/plan/text", post(create_plan_text))
}

async fn get_options() -> Json<ApiOptions> {
    Json(ApiOptions {
        species: Species::ALL.iter().map(|s| s.label().to_string()).collect(),
        destinations: Destination::ALL
            .iter()
            .map(|d| d.label().to_string())
            .collect(),
        airports: std::iter::once(Airport::NOT_SELECTED)
            .chain(Airport::ALL.iter().map(|a| a.label()))
            .map(str::to_string)
            .collect(),
    })
}

async fn create_plan(
    payload: Result<Json<PlanForm>, JsonRejection>,
) -> Result<Json<TravelPlan>, (StatusCode, Json<ApiError>)> {
    evaluate_form(payload).map(Json)
}

async fn create_plan_text(
    payload: Result<Json<PlanForm>, JsonRejection>,
) -> Result<impl IntoResponse, (StatusCode, Json<ApiError>)> {
    let plan = evaluate_form(payload)?;
    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        render::render_text(&plan),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> PlanForm {
        PlanForm {
            species: Some("Perro".to_string()),
            destination: Some("Estados Unidos".to_string()),
            arrival_airport: Some("N/A".to_string()),
            weight_kg: Some(12.5),
            birth_date: Some("2024-01-01".to_string()),
            vaccination_date: Some("01/05/2024".to_string()),
            blood_collection_date: Some("2024-06-15".to_string()),
            travel_date: Some("2024-09-01".to_string()),
        }
    }

    #[test]
    fn test_form_conversion() {
        let request = TravelRequest::try_from(form()).unwrap();

        assert_eq!(request.species, Some(Species::Dog));
        assert_eq!(request.destination, Some(Destination::UnitedStates));
        assert_eq!(request.arrival_airport, None);
        assert_eq!(request.weight_kg, 12.5);
        assert_eq!(request.vaccination_date, NaiveDate::from_ymd_opt(2024, 5, 1));
        assert!(request.birth_date.is_some() && request.blood_collection_date.is_some());
        assert_eq!(request.travel_date, NaiveDate::from_ymd_opt(2024, 9, 1));
    }

    #[test]
    fn test_blank_values_are_absent() {
        let request = TravelRequest::try_from(PlanForm {
            species: Some("  ".to_string()),
            travel_date: Some(String::new()),
            ..form()
        })
        .unwrap();

        assert_eq!(request.species, None);
        assert_eq!(request.travel_date, None);
        assert_eq!(TravelRequest::try_from(PlanForm::default()).unwrap(), TravelRequest::default());
    }

    #[test]
    fn test_unknown_destination_is_not_an_error() {
        let request = TravelRequest::try_from(PlanForm {
            destination: Some("Japón".to_string()),
            ..form()
        })
        .unwrap();
        assert_eq!(request.destination, None);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let bad_date = TravelRequest::try_from(PlanForm {
            travel_date: Some("2024-13-40".to_string()),
            ..form()
        });
        assert!(bad_date.unwrap_err().to_string().contains("travelDate"));

        let bad_weight = TravelRequest::try_from(PlanForm {
            weight_kg: Some(-1.0),
            ..form()
        });
        assert!(bad_weight.unwrap_err().is_client_error());

        let bad_airport = TravelRequest::try_from(PlanForm {
            arrival_airport: Some("Gatwick".to_string()),
            ..form()
        });
        assert!(bad_airport.is_err());
    }
}
