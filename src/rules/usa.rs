//! USA import rules for dogs (CDC entry requirements)

use crate::models::{AdvisoryMessage, Destination, Species, TravelPlan};

use super::calendar::{DateWindow, days_between, format_date, shift};
use super::{
    MIN_VACCINE_TO_BLOOD_DAYS, RuleContext, airport, blood_test_confirmed, blood_test_too_early,
    planned_travel_check,
};

/// Average month length used for age calculations
pub const DAYS_PER_MONTH: f64 = 30.44;

/// Dogs must be at least six months old on arrival
pub const MIN_AGE_MONTHS: f64 = 6.0;

/// Rabies vaccine only counts when given at 90 days of age or later
pub const MIN_VACCINATION_AGE_DAYS: i64 = 90;

/// Days after blood collection before the ticket may be bought
pub const BLOOD_TO_TICKET_DAYS: i64 = 28;

pub fn applies(context: &RuleContext) -> bool {
    context.destination == Some(Destination::UnitedStates) && context.species == Some(Species::Dog)
}

pub fn produce(context: &RuleContext, plan: &mut TravelPlan) {
    validate_age_at_travel(context, plan);
    validate_age_at_vaccination(context, plan);
    validate_blood_test(context, plan);
    travel_window(context, plan);
    documentation(context, plan);
    airport::produce(context, plan);
}

/// Age in months, one decimal, as shown to the user
#[must_use]
pub fn format_months(age_days: i64) -> String {
    format!("{:.1}", age_days as f64 / DAYS_PER_MONTH)
}

fn validate_age_at_travel(context: &RuleContext, plan: &mut TravelPlan) {
    let age_days = days_between(context.birth, context.travel);
    let months = format_months(age_days);

    if (age_days as f64) < MIN_AGE_MONTHS * DAYS_PER_MONTH {
        plan.validations.push(AdvisoryMessage::warning(format!(
            "Entrada no permitida: el perro tendrá {months} meses en la fecha de viaje y debe tener al menos 6 meses."
        )));
    } else {
        plan.validations.push(AdvisoryMessage::ok(format!(
            "Edad en la fecha de viaje: {months} meses."
        )));
    }
}

fn validate_age_at_vaccination(context: &RuleContext, plan: &mut TravelPlan) {
    let age_days = days_between(context.birth, context.vaccination);

    if age_days < MIN_VACCINATION_AGE_DAYS {
        plan.validations.push(AdvisoryMessage::warning(format!(
            "La vacuna antirrábica debe administrarse con al menos 90 días de edad (edad en la vacunación: {age_days} días)."
        )));
    } else {
        plan.validations.push(AdvisoryMessage::ok(format!(
            "Edad en la vacunación antirrábica: {age_days} días."
        )));
    }
}

fn validate_blood_test(context: &RuleContext, plan: &mut TravelPlan) {
    if context.vaccine_to_blood_days() < MIN_VACCINE_TO_BLOOD_DAYS {
        plan.validations.push(blood_test_too_early(context));
    } else {
        plan.validations.push(blood_test_confirmed(context));
    }
}

fn travel_window(context: &RuleContext, plan: &mut TravelPlan) {
    let earliest = shift(context.blood_collection, BLOOD_TO_TICKET_DAYS);

    plan.travel_windows.push(AdvisoryMessage::info(format!(
        "Fecha mínima para comprar el billete (28 días después de la extracción de sangre): {}.",
        format_date(earliest)
    )));
    plan.travel_windows
        .push(planned_travel_check(context.travel, earliest));
}

fn documentation(context: &RuleContext, plan: &mut TravelPlan) {
    let travel = context.travel;
    let cfrvm = DateWindow::around(travel, -30, 0);
    let import_permit = DateWindow::around(travel, -10, 0);
    let health_certificate = DateWindow::around(travel, -5, 0);
    let cvi_from = shift(travel, -30);

    plan.documentation.push(AdvisoryMessage::info(format!(
        "Certificado CFRVM: obtener {cfrvm}."
    )));
    plan.documentation.push(AdvisoryMessage::info(format!(
        "Permiso de importación: solicitar {import_permit}."
    )));
    plan.documentation.push(AdvisoryMessage::info(format!(
        "Certificado sanitario: emitir {health_certificate} (válido 5 días)."
    )));
    plan.documentation.push(AdvisoryMessage::info(format!(
        "Solicitud del CVI: a partir del {} (válido 5 días tras su emisión).",
        format_date(cvi_from)
    )));
}
