// ============================================================================
// Seed Infrastructure - XML Reference Data Parsers
// File: crates/seed-infrastructure/src/parsers.rs
// ============================================================================
//! Countries, states and cities from the bundled XML files
//!
//! ```xml
//! <countries><country countryCode="BR" countryName="Brasil"/></countries>
//! <states><state stateCode="SP" stateName="São Paulo"/></states>
//! <cities><city cityCode="3550308" cityName="São Paulo" capital="true"/></cities>
//! ```

use serde::Deserialize;

use seed_core::domain::{City, Country, Operator, State};
use seed_core::error::DomainError;
use seed_core::parsers::{CityParser, CountryParser, StateParser};

#[derive(Debug, Deserialize)]
struct CountriesDocument {
    #[serde(rename = "country", default)]
    countries: Vec<CountryElement>,
}

#[derive(Debug, Deserialize)]
struct CountryElement {
    #[serde(rename = "@countryCode")]
    code: String,
    #[serde(rename = "@countryName", default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StatesDocument {
    #[serde(rename = "state", default)]
    states: Vec<StateElement>,
}

#[derive(Debug, Deserialize)]
struct StateElement {
    #[serde(rename = "@stateCode")]
    code: String,
    #[serde(rename = "@stateName", default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CitiesDocument {
    #[serde(rename = "city", default)]
    cities: Vec<CityElement>,
}

#[derive(Debug, Deserialize)]
struct CityElement {
    #[serde(rename = "@cityCode")]
    code: String,
    #[serde(rename = "@cityName", default)]
    name: Option<String>,
    #[serde(rename = "@capital", default)]
    capital: bool,
}

fn parse_document<'de, T: Deserialize<'de>>(
    resource: &str,
    source: &'de str,
) -> Result<T, DomainError> {
    quick_xml::de::from_str(source).map_err(|e| DomainError::ParseError {
        resource: resource.to_string(),
        message: e.to_string(),
    })
}

/// Trimmed code and name; the name falls back to the code.
fn code_and_name(
    resource: &str,
    element: &str,
    code: &str,
    name: Option<&str>,
) -> Result<(String, String), DomainError> {
    let code = code.trim();
    if code.is_empty() {
        return Err(DomainError::ParseError {
            resource: resource.to_string(),
            message: format!("{} without a code", element),
        });
    }
    let name = name.map(str::trim).filter(|n| !n.is_empty()).unwrap_or(code);
    Ok((code.to_string(), name.to_string()))
}

pub struct XmlCountryParser;

impl CountryParser for XmlCountryParser {
    fn parse_countries(
        &self,
        context: &Operator,
        resource: &str,
        source: &str,
    ) -> Result<Vec<Country>, DomainError> {
        let document: CountriesDocument = parse_document(resource, source)?;
        document
            .countries
            .iter()
            .map(|c| {
                let (code, name) = code_and_name(resource, "country", &c.code, c.name.as_deref())?;
                Ok(Country::new(context, &code, &name))
            })
            .collect()
    }
}

pub struct XmlStateParser;

impl StateParser for XmlStateParser {
    fn parse_states(
        &self,
        context: &Operator,
        country: &Country,
        resource: &str,
        source: &str,
    ) -> Result<Vec<State>, DomainError> {
        let document: StatesDocument = parse_document(resource, source)?;
        document
            .states
            .iter()
            .map(|s| {
                let (code, name) = code_and_name(resource, "state", &s.code, s.name.as_deref())?;
                Ok(State::new(context, country, &code, &name))
            })
            .collect()
    }
}

pub struct XmlCityParser;

impl CityParser for XmlCityParser {
    fn parse_cities(
        &self,
        context: &Operator,
        state: &State,
        resource: &str,
        source: &str,
    ) -> Result<Vec<City>, DomainError> {
        let document: CitiesDocument = parse_document(resource, source)?;
        document
            .cities
            .iter()
            .map(|c| {
                let (code, name) = code_and_name(resource, "city", &c.code, c.name.as_deref())?;
                Ok(City::new(context, state, &code, &name, c.capital))
            })
            .collect()
    }
}
