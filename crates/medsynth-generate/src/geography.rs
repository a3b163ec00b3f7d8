//! Fixed Country → State → City hierarchy.
//!
//! Immutable for the life of the process; every location column in every
//! table is drawn from this data, so lookups are checked rather than
//! assumed even though internal keys are always hierarchy-derived.

use std::collections::BTreeMap;

use medsynth_core::LookupError;

const HIERARCHY: &[(&str, &[(&str, &[&str])])] = &[
    (
        "Australia",
        &[
            ("New South Wales", &["Sydney", "Newcastle", "Wollongong"]),
            ("Queensland", &["Brisbane", "Gold Coast", "Cairns"]),
            ("Victoria", &["Melbourne", "Geelong", "Ballarat"]),
        ],
    ),
    (
        "Canada",
        &[
            ("Alberta", &["Calgary", "Edmonton"]),
            ("British Columbia", &["Vancouver", "Victoria", "Kelowna"]),
            ("Ontario", &["Toronto", "Ottawa", "Hamilton"]),
            ("Quebec", &["Montreal", "Quebec City"]),
        ],
    ),
    (
        "India",
        &[
            ("Karnataka", &["Bengaluru", "Mysuru", "Mangaluru"]),
            ("Maharashtra", &["Mumbai", "Pune", "Nagpur"]),
            ("Tamil Nadu", &["Chennai", "Coimbatore", "Madurai"]),
            ("West Bengal", &["Kolkata", "Howrah"]),
        ],
    ),
    (
        "United Kingdom",
        &[
            ("England", &["London", "Manchester", "Birmingham", "Leeds"]),
            ("Scotland", &["Glasgow", "Edinburgh", "Aberdeen"]),
            ("Wales", &["Cardiff", "Swansea"]),
        ],
    ),
    (
        "United States",
        &[
            (
                "California",
                &["Los Angeles", "San Diego", "San Jose", "Sacramento"],
            ),
            ("Illinois", &["Chicago", "Springfield", "Peoria"]),
            ("New York", &["New York City", "Buffalo", "Rochester"]),
            ("Texas", &["Houston", "Dallas", "Austin", "San Antonio"]),
        ],
    ),
];

/// Read-only lookup view over the hierarchy, built once per run.
#[derive(Debug)]
pub struct Geography {
    countries: Vec<&'static str>,
    states_by_country: BTreeMap<&'static str, Vec<&'static str>>,
    cities_by_state: BTreeMap<&'static str, Vec<&'static str>>,
}

impl Geography {
    pub fn new() -> Self {
        let mut countries = Vec::new();
        let mut states_by_country = BTreeMap::new();
        let mut cities_by_state = BTreeMap::new();

        for (country, states) in HIERARCHY {
            countries.push(*country);
            let mut names = Vec::new();
            for (state, cities) in *states {
                names.push(*state);
                cities_by_state.insert(*state, cities.to_vec());
            }
            states_by_country.insert(*country, names);
        }

        Self {
            countries,
            states_by_country,
            cities_by_state,
        }
    }

    /// All configured countries, in declaration order.
    pub fn countries(&self) -> &[&'static str] {
        &self.countries
    }

    pub fn states_of(&self, country: &str) -> Result<&[&'static str], LookupError> {
        self.states_by_country
            .get(country)
            .map(Vec::as_slice)
            .ok_or_else(|| LookupError::UnknownCountry(country.to_string()))
    }

    pub fn cities_of(&self, state: &str) -> Result<&[&'static str], LookupError> {
        self.cities_by_state
            .get(state)
            .map(Vec::as_slice)
            .ok_or_else(|| LookupError::UnknownState(state.to_string()))
    }
}

impl Default for Geography {
    fn default() -> Self {
        Self::new()
    }
}
