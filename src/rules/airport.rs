//! Arrival airport facility rules for dogs entering the USA

use crate::models::{AdvisoryMessage, Airport, TravelPlan};

use super::RuleContext;
use super::calendar::{format_date, in_winter_embargo, shift};

/// Dogs above this weight travel in the cargo hold
pub const CARGO_WEIGHT_LIMIT_KG: f64 = 9.0;

/// Advance reservation required by an airport's animal facility
fn reservation_days(airport: Airport) -> Option<i64> {
    match airport {
        Airport::Atlanta => Some(60),
        Airport::Miami => Some(15),
        _ => None,
    }
}

pub fn produce(context: &RuleContext, plan: &mut TravelPlan) {
    let rules = &mut plan.airport_rules;

    let Some(airport) = context.arrival_airport else {
        rules.push(AdvisoryMessage::warning(
            "Seleccione el aeropuerto de llegada para conocer los plazos de reserva de la instalación de animales.",
        ));
        return;
    };

    if let Some(days) = reservation_days(airport) {
        rules.push(AdvisoryMessage::warning(format!(
            "Aeropuerto de {airport}: es obligatorio reservar la instalación de animales con al menos {days} días de antelación."
        )));
        rules.push(AdvisoryMessage::info(format!(
            "Fecha límite para la reserva: {}.",
            format_date(shift(context.travel, -days))
        )));
        return;
    }

    if airport == Airport::NewYork {
        rules.push(AdvisoryMessage::info(
            "Aeropuerto de Nueva York (JFK): consulte las normas de la instalación de animales antes de viajar.",
        ));
        if context.weight_kg > CARGO_WEIGHT_LIMIT_KG && in_winter_embargo(context.travel) {
            rules.push(AdvisoryMessage::warning(
                "Entre el 15 de diciembre y el 15 de abril no se admiten perros de más de 9 kg en bodega.",
            ));
        }
        return;
    }

    rules.push(AdvisoryMessage::info(format!(
        "No hay datos de plazos para el aeropuerto de {airport}; consulte directamente con el aeropuerto."
    )));
}
