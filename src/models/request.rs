//! Travel request model: the form values the evaluator works on

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Pet species supported by the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    #[serde(rename = "Perro", alias = "Dog", alias = "dog")]
    Dog,
    #[serde(rename = "Gato", alias = "Cat", alias = "cat")]
    Cat,
}

impl Species {
    pub const ALL: [Species; 2] = [Species::Dog, Species::Cat];

    /// Label shown in the form and used on the wire
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Species::Dog => "Perro",
            Species::Cat => "Gato",
        }
    }

    /// Other spellings accepted when parsing form values
    fn aliases(self) -> &'static [&'static str] {
        match self {
            Species::Dog => &["Dog"],
            Species::Cat => &["Cat"],
        }
    }
}

/// Destination countries offered by the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Destination {
    #[serde(rename = "Portugal")]
    Portugal,
    #[serde(rename = "Finlandia", alias = "Finland")]
    Finland,
    #[serde(rename = "Irlanda", alias = "Ireland")]
    Ireland,
    #[serde(rename = "Malta")]
    Malta,
    #[serde(rename = "Noruega", alias = "Norway")]
    Norway,
    #[serde(rename = "Estados Unidos", alias = "United States", alias = "USA")]
    UnitedStates,
}

impl Destination {
    pub const ALL: [Destination; 6] = [
        Destination::Portugal,
        Destination::Finland,
        Destination::Ireland,
        Destination::Malta,
        Destination::Norway,
        Destination::UnitedStates,
    ];

    /// Label shown in the form and used on the wire
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Destination::Portugal => "Portugal",
            Destination::Finland => "Finlandia",
            Destination::Ireland => "Irlanda",
            Destination::Malta => "Malta",
            Destination::Norway => "Noruega",
            Destination::UnitedStates => "Estados Unidos",
        }
    }

    /// Other spellings accepted when parsing form values
    fn aliases(self) -> &'static [&'static str] {
        match self {
            Destination::Portugal | Destination::Malta => &[],
            Destination::Finland => &["Finland"],
            Destination::Ireland => &["Ireland"],
            Destination::Norway => &["Norway"],
            Destination::UnitedStates => &["United States", "USA"],
        }
    }

    /// Destinations handled by the EU pet passport rules
    #[must_use]
    pub fn follows_eu_rules(self) -> bool {
        !matches!(self, Destination::UnitedStates)
    }
}

/// USA arrival airports offered by the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Airport {
    #[serde(rename = "Atlanta", alias = "ATL")]
    Atlanta,
    #[serde(rename = "Miami", alias = "MIA")]
    Miami,
    #[serde(rename = "Nueva York", alias = "New York", alias = "JFK")]
    NewYork,
    #[serde(rename = "Los Ángeles", alias = "Los Angeles", alias = "LAX")]
    LosAngeles,
    #[serde(rename = "Chicago", alias = "ORD")]
    Chicago,
    #[serde(rename = "Houston", alias = "IAH")]
    Houston,
    #[serde(rename = "Dallas", alias = "DFW")]
    Dallas,
    #[serde(rename = "San Francisco", alias = "SFO")]
    SanFrancisco,
    #[serde(rename = "Washington", alias = "IAD")]
    Washington,
}

impl Airport {
    pub const ALL: [Airport; 9] = [
        Airport::Atlanta,
        Airport::Miami,
        Airport::NewYork,
        Airport::LosAngeles,
        Airport::Chicago,
        Airport::Houston,
        Airport::Dallas,
        Airport::SanFrancisco,
        Airport::Washington,
    ];

    /// Form value meaning "no airport selected"
    pub const NOT_SELECTED: &'static str = "N/A";

    /// Label shown in the form and used on the wire
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Airport::Atlanta => "Atlanta",
            Airport::Miami => "Miami",
            Airport::NewYork => "Nueva York",
            Airport::LosAngeles => "Los Ángeles",
            Airport::Chicago => "Chicago",
            Airport::Houston => "Houston",
            Airport::Dallas => "Dallas",
            Airport::SanFrancisco => "San Francisco",
            Airport::Washington => "Washington",
        }
    }

    /// English names and IATA codes accepted when parsing form values
    fn aliases(self) -> &'static [&'static str] {
        match self {
            Airport::Atlanta => &["ATL"],
            Airport::Miami => &["MIA"],
            Airport::NewYork => &["New York", "JFK"],
            Airport::LosAngeles => &["Los Angeles", "LAX"],
            Airport::Chicago => &["ORD"],
            Airport::Houston => &["IAH"],
            Airport::Dallas => &["DFW"],
            Airport::SanFrancisco => &["SFO"],
            Airport::Washington => &["IAD"],
        }
    }
}

/// A form value that does not name a known option
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown option '{0}'")]
pub struct UnknownOption(pub String);

/// Case-insensitive match of `input` against each option's label and aliases
fn parse_option<T: Copy>(
    input: &str,
    options: &[T],
    label: fn(T) -> &'static str,
    aliases: fn(T) -> &'static [&'static str],
) -> Result<T, UnknownOption> {
    let wanted = input.trim().to_lowercase();
    options
        .iter()
        .copied()
        .find(|option| {
            std::iter::once(label(*option))
                .chain(aliases(*option).iter().copied())
                .any(|name| name.to_lowercase() == wanted)
        })
        .ok_or_else(|| UnknownOption(input.to_string()))
}

impl FromStr for Species {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_option(s, &Species::ALL, Species::label, Species::aliases)
    }
}

impl FromStr for Destination {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_option(s, &Destination::ALL, Destination::label, Destination::aliases)
    }
}

impl FromStr for Airport {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_option(s, &Airport::ALL, Airport::label, Airport::aliases)
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Airport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything the evaluator needs for one run
///
/// `species` and `destination` are optional because the form may hold no
/// selection yet; such requests simply match no rule.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelRequest {
    pub species: Option<Species>,
    pub destination: Option<Destination>,
    /// `None` means "N/A"
    pub arrival_airport: Option<Airport>,
    /// Only consulted by the New York cargo-hold rule
    #[serde(default)]
    pub weight_kg: f64,
    pub birth_date: Option<NaiveDate>,
    pub vaccination_date: Option<NaiveDate>,
    pub blood_collection_date: Option<NaiveDate>,
    pub travel_date: Option<NaiveDate>,
}

impl TravelRequest {
    /// Create a request with species and destination selected and no dates
    #[must_use]
    pub fn new(species: Species, destination: Destination) -> Self {
        Self {
            species: Some(species),
            destination: Some(destination),
            ..Self::default()
        }
    }

    /// Set all four dates at once
    #[must_use]
    pub fn with_dates(
        mut self,
        birth: NaiveDate,
        vaccination: NaiveDate,
        blood_collection: NaiveDate,
        travel: NaiveDate,
    ) -> Self {
        self.birth_date = Some(birth);
        self.vaccination_date = Some(vaccination);
        self.blood_collection_date = Some(blood_collection);
        self.travel_date = Some(travel);
        self
    }

    #[must_use]
    pub fn with_airport(mut self, airport: Airport) -> Self {
        self.arrival_airport = Some(airport);
        self
    }

    #[must_use]
    pub fn with_weight(mut self, weight_kg: f64) -> Self {
        self.weight_kg = weight_kg;
        self
    }
}
