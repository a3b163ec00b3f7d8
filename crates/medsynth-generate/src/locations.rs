//! Batched sampling of consistent location triples.

use rand::Rng;

use medsynth_core::LookupError;

use crate::geography::Geography;

/// Column-oriented batch of (country, state, city) triples.
///
/// The three vectors are always equal length; index `i` across them forms
/// one consistent triple.
#[derive(Debug, Clone)]
pub struct LocationColumns {
    pub countries: Vec<&'static str>,
    pub states: Vec<&'static str>,
    pub cities: Vec<&'static str>,
}

/// Draws hierarchy-consistent triples from a [`Geography`].
pub struct LocationSampler<'a> {
    geography: &'a Geography,
}

impl<'a> LocationSampler<'a> {
    pub fn new(geography: &'a Geography) -> Self {
        Self { geography }
    }

    /// Sample `n` triples in one call, amortizing hierarchy traversal.
    ///
    /// Each row draws its country first, then a state within that country,
    /// then a city within that state. Drawing the three columns from
    /// independent global pools would break the hierarchy invariant.
    pub fn sample(&self, n: u64, rng: &mut impl Rng) -> Result<LocationColumns, LookupError> {
        let n = n as usize;
        let mut countries = Vec::with_capacity(n);
        let mut states = Vec::with_capacity(n);
        let mut cities = Vec::with_capacity(n);

        for _ in 0..n {
            let country = pick(self.geography.countries(), rng);
            let state = pick(self.geography.states_of(country)?, rng);
            let city = pick(self.geography.cities_of(state)?, rng);
            countries.push(country);
            states.push(state);
            cities.push(city);
        }

        Ok(LocationColumns {
            countries,
            states,
            cities,
        })
    }
}

fn pick<'s>(values: &[&'s str], rng: &mut impl Rng) -> &'s str {
    values[rng.random_range(0..values.len())]
}
