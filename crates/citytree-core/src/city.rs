// crates/citytree-core/src/city.rs
use crate::error::{CityError, Result};
use crate::traits::NameMatch;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A validated city record.
///
/// Every `City` that exists has a non-empty name, a non-empty country and a
/// strictly positive population. The constructor and every setter enforce
/// this, and deserialization goes through the same checks.
///
/// Cities are ordered by population only (see [`City::compare`]) but
/// identified by case-insensitive name (see [`NameMatch::is_named`]). Because
/// the two disagree, `City` implements neither `Ord` nor `PartialEq`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "CityRaw")]
pub struct City {
    name: String,
    country: String,
    state: String,
    population: i64,
}

/// Unvalidated wire form of a [`City`].
#[derive(Debug, Deserialize)]
struct CityRaw {
    name: String,
    country: String,
    #[serde(default)]
    state: String,
    population: i64,
}

impl TryFrom<CityRaw> for City {
    type Error = CityError;

    fn try_from(raw: CityRaw) -> Result<Self> {
        City::new(raw.name, raw.country, Some(&raw.state), raw.population)
    }
}

impl City {
    /// Creates a city, validating every field.
    ///
    /// `state` may be `None` or empty; both store an empty state.
    ///
    /// # Examples
    ///
    /// ```
    /// use citytree_core::City;
    ///
    /// let boston = City::new("Boston", "USA", Some("MA"), 50).unwrap();
    /// assert_eq!(boston.state(), "MA");
    ///
    /// assert!(City::new("Nowhere", "USA", None, 0).is_err());
    /// assert!(City::new("", "USA", None, 10).is_err());
    /// ```
    pub fn new(
        name: impl Into<String>,
        country: impl Into<String>,
        state: Option<&str>,
        population: i64,
    ) -> Result<Self> {
        let name = name.into();
        let country = country.into();
        validate_name(&name)?;
        validate_country(&country)?;
        validate_population(population)?;

        Ok(Self {
            name,
            country,
            state: state.unwrap_or_default().to_string(),
            population,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    /// The state or region, empty when the city has none.
    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn population(&self) -> i64 {
        self.population
    }

    /// On error the city is left unchanged.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        validate_name(&name)?;
        self.name = name;
        Ok(())
    }

    pub fn set_country(&mut self, country: impl Into<String>) -> Result<()> {
        let country = country.into();
        validate_country(&country)?;
        self.country = country;
        Ok(())
    }

    /// `None` and `Some("")` both clear the state.
    pub fn set_state(&mut self, state: Option<&str>) {
        self.state = state.unwrap_or_default().to_string();
    }

    pub fn set_population(&mut self, population: i64) -> Result<()> {
        validate_population(population)?;
        self.population = population;
        Ok(())
    }

    /// Orders two cities by population.
    pub fn compare(&self, other: &City) -> Ordering {
        self.population.cmp(&other.population)
    }
}

impl NameMatch for City {
    fn name_str(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.state.is_empty() {
            "N/A"
        } else {
            &self.state
        };
        write!(
            f,
            "City: {}, State: {}, Country: {}, Population: {}",
            self.name, state, self.country, self.population
        )
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(CityError::Validation("city name cannot be empty".into()));
    }
    Ok(())
}

fn validate_country(country: &str) -> Result<()> {
    if country.is_empty() {
        return Err(CityError::Validation("country name cannot be empty".into()));
    }
    Ok(())
}

fn validate_population(population: i64) -> Result<()> {
    if population <= 0 {
        return Err(CityError::Validation(format!(
            "population must be greater than zero, got {population}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boston() -> City {
        City::new("Boston", "USA", Some("MA"), 50).unwrap()
    }

    #[test]
    fn rejects_invalid_fields() {
        assert!(matches!(
            City::new("", "USA", None, 10),
            Err(CityError::Validation(_))
        ));
        assert!(matches!(
            City::new("Boston", "", None, 10),
            Err(CityError::Validation(_))
        ));
        assert!(matches!(
            City::new("Boston", "USA", None, 0),
            Err(CityError::Validation(_))
        ));
        assert!(matches!(
            City::new("Boston", "USA", None, -5),
            Err(CityError::Validation(_))
        ));
    }

    #[test]
    fn missing_state_is_empty() {
        let apollo = City::new("Apollo", "Nowhereland", None, 100).unwrap();
        assert_eq!(apollo.state(), "");
    }

    #[test]
    fn failed_setter_leaves_city_unchanged() {
        let mut city = boston();
        assert!(city.set_name("").is_err());
        assert!(city.set_country("").is_err());
        assert!(city.set_population(0).is_err());
        assert_eq!(city.name(), "Boston");
        assert_eq!(city.country(), "USA");
        assert_eq!(city.population(), 50);
    }

    #[test]
    fn setters_update_single_field() {
        let mut city = boston();
        city.set_name("Cambridge").unwrap();
        city.set_population(118_000).unwrap();
        city.set_country("United States").unwrap();
        assert_eq!(city.name(), "Cambridge");
        assert_eq!(city.population(), 118_000);
        assert_eq!(city.country(), "United States");
        assert_eq!(city.state(), "MA");

        city.set_state(Some(""));
        assert_eq!(city.state(), "");
        city.set_state(Some("Massachusetts"));
        city.set_state(None);
        assert_eq!(city.state(), "");
    }

    #[test]
    fn display_format() {
        assert_eq!(
            boston().to_string(),
            "City: Boston, State: MA, Country: USA, Population: 50"
        );
        let apollo = City::new("Apollo", "Nowhereland", None, 100).unwrap();
        assert_eq!(
            apollo.to_string(),
            "City: Apollo, State: N/A, Country: Nowhereland, Population: 100"
        );
    }

    #[test]
    fn compare_uses_population_only() {
        let small = City::new("Zeta", "X", None, 1).unwrap();
        let large = City::new("Alpha", "X", None, 2).unwrap();
        assert_eq!(small.compare(&large), Ordering::Less);
        assert_eq!(large.compare(&small), Ordering::Greater);

        let twin = City::new("Other", "Y", None, 1).unwrap();
        assert_eq!(small.compare(&twin), Ordering::Equal);
    }

    #[test]
    fn name_matching_is_case_insensitive() {
        let city = boston();
        assert!(city.is_named("BOSTON"));
        assert!(city.name_starts_with("bos"));
        assert!(!city.is_named("Bos"));
    }

    #[cfg(feature = "json")]
    #[test]
    fn deserialize_validates() {
        let ok: City =
            serde_json::from_str(r#"{"name":"Boston","country":"USA","population":50}"#).unwrap();
        assert_eq!(ok.state(), "");

        let bad = serde_json::from_str::<City>(
            r#"{"name":"Boston","country":"USA","state":"MA","population":0}"#,
        );
        assert!(bad.is_err());
    }
}
