//! EU pet passport rules (Portugal, Finland, Ireland, Malta, Norway)

use crate::models::{AdvisoryMessage, Destination, Species, TravelPlan};

use super::calendar::{DateWindow, format_date, shift};
use super::{
    MIN_VACCINE_TO_BLOOD_DAYS, RuleContext, blood_test_confirmed, blood_test_too_early,
    planned_travel_check,
};

/// Days after blood collection before the pet may enter
pub const BLOOD_TO_TRAVEL_DAYS: i64 = 90;

/// Health certificate (CVI) must be issued in the last 10 days before travel
const HEALTH_CERTIFICATE_DAYS: i64 = 10;

/// Destination government must be notified 2 days ahead
const NOTIFICATION_DAYS: i64 = 2;

pub fn applies(context: &RuleContext) -> bool {
    context.species.is_some() && context.destination.is_some_and(Destination::follows_eu_rules)
}

/// Echinococcus treatment is mandatory for dogs entering these countries
fn requires_antiparasitic(destination: Destination) -> bool {
    matches!(
        destination,
        Destination::Finland | Destination::Ireland | Destination::Malta | Destination::Norway
    )
}

pub fn produce(context: &RuleContext, plan: &mut TravelPlan) {
    validate_blood_test(context, plan);
    travel_window(context, plan);
    documentation(context, plan);
    antiparasitic_treatment(context, plan);
}

fn validate_blood_test(context: &RuleContext, plan: &mut TravelPlan) {
    if context.vaccine_to_blood_days() < MIN_VACCINE_TO_BLOOD_DAYS {
        plan.validations.push(blood_test_too_early(context));
    } else {
        plan.validations.push(AdvisoryMessage::ok(format!(
            "Vacuna antirrábica administrada el {}.",
            format_date(context.vaccination)
        )));
        plan.validations.push(blood_test_confirmed(context));
    }
}

fn travel_window(context: &RuleContext, plan: &mut TravelPlan) {
    let earliest = shift(context.blood_collection, BLOOD_TO_TRAVEL_DAYS);

    plan.travel_windows.push(AdvisoryMessage::info(format!(
        "Fecha mínima de viaje (90 días después de la extracción de sangre): {}.",
        format_date(earliest)
    )));
    plan.travel_windows
        .push(planned_travel_check(context.travel, earliest));
}

fn documentation(context: &RuleContext, plan: &mut TravelPlan) {
    let certificate = DateWindow::around(context.travel, -HEALTH_CERTIFICATE_DAYS, 0);
    let notify_by = shift(context.travel, -NOTIFICATION_DAYS);

    plan.documentation.push(AdvisoryMessage::info(format!(
        "Certificado sanitario (CVI): debe emitirse {certificate}."
    )));
    plan.documentation.push(AdvisoryMessage::info(format!(
        "Notificar la llegada a las autoridades del país de destino antes del {}.",
        format_date(notify_by)
    )));
}

fn antiparasitic_treatment(context: &RuleContext, plan: &mut TravelPlan) {
    let mandatory = context.species == Some(Species::Dog)
        && context.destination.is_some_and(requires_antiparasitic);

    if mandatory {
        let window = DateWindow::around(context.travel, -5, -1);
        plan.antiparasitic_treatment.push(AdvisoryMessage::warning(
            "Tratamiento antiparasitario (Echinococcus) obligatorio para perros en este destino.",
        ));
        plan.antiparasitic_treatment.push(AdvisoryMessage::info(format!(
            "Administrar el tratamiento {window} (entre 5 y 1 días antes del viaje)."
        )));
    } else {
        plan.antiparasitic_treatment.push(AdvisoryMessage::ok(
            "Tratamiento antiparasitario no requerido para este destino/especie.",
        ));
    }
}
