use std::collections::HashMap;

use serde::Serialize;

/// A reportable city.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CityEntry {
    #[serde(rename = "city")]
    pub name: &'static str,
    pub state: &'static str,
    pub lat: f64,
    pub lng: f64,
}

pub static INDIAN_CITIES: [CityEntry; 10] = [
    city("Mumbai", "Maharashtra", 19.0760, 72.8777),
    city("Delhi", "Delhi", 28.6139, 77.2090),
    city("Bangalore", "Karnataka", 12.9716, 77.5946),
    city("Hyderabad", "Telangana", 17.3850, 78.4867),
    city("Chennai", "Tamil Nadu", 13.0827, 80.2707),
    city("Kolkata", "West Bengal", 22.5726, 88.3639),
    city("Pune", "Maharashtra", 18.5204, 73.8567),
    city("Ahmedabad", "Gujarat", 23.0225, 72.5714),
    city("Jaipur", "Rajasthan", 26.9124, 75.7873),
    city("Lucknow", "Uttar Pradesh", 26.8467, 80.9462),
];

const fn city(name: &'static str, state: &'static str, lat: f64, lng: f64) -> CityEntry {
    CityEntry {
        name,
        state,
        lat,
        lng,
    }
}

/// Lookup table over [`INDIAN_CITIES`], keyed by lowercased name.
#[derive(Debug, Clone)]
pub struct CityRegistry {
    by_key: HashMap<String, &'static CityEntry>,
}

impl Default for CityRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CityRegistry {
    pub fn new() -> Self {
        let by_key = INDIAN_CITIES
            .iter()
            .map(|entry| (key(entry.name), entry))
            .collect();

        Self { by_key }
    }

    /// Exact, case-insensitive lookup. Surrounding whitespace is ignored, nothing else is.
    pub fn resolve(&self, name: &str) -> Option<&'static CityEntry> {
        self.by_key.get(&key(name)).copied()
    }

    /// Substring match on city or state name. An empty query returns every city.
    pub fn search(&self, query: &str) -> Vec<&'static CityEntry> {
        let query = key(query);

        INDIAN_CITIES
            .iter()
            .filter(|entry| {
                query.is_empty()
                    || entry.name.to_lowercase().contains(&query)
                    || entry.state.to_lowercase().contains(&query)
            })
            .collect()
    }

    pub fn all(&self) -> &'static [CityEntry] {
        &INDIAN_CITIES
    }
}

fn key(name: &str) -> String {
    name.trim().to_lowercase()
}
