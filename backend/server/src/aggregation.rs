//! Groups reports by location and disease for the map view.
//!
//! Locations are keyed by exact `(lat, lng)` equality rather than city text, so two reports
//! whose city strings differ only in casing or spacing still land on the same marker.

use std::collections::{BTreeMap, HashMap, hash_map::Entry};

use crate::{
    models::{AggregatedLocation, CaseReport, DiseaseTally},
    policy::{Severity, marker_radius},
};

pub fn aggregate(reports: &[CaseReport]) -> Vec<AggregatedLocation> {
    let mut index: HashMap<(u64, u64), usize> = HashMap::new();
    let mut groups: Vec<Group> = Vec::new();

    for report in reports {
        let slot = match index.entry(coordinate_key(report.lat, report.lng)) {
            Entry::Occupied(entry) => *entry.get(),
            Entry::Vacant(entry) => {
                groups.push(Group::new(report));
                *entry.insert(groups.len() - 1)
            }
        };

        groups[slot].add(report);
    }

    groups.into_iter().map(Group::finish).collect()
}

struct Group {
    city: String,
    lat: f64,
    lng: f64,
    diseases: BTreeMap<String, DiseaseTally>,
    total_cases: i64,
}

impl Group {
    fn new(report: &CaseReport) -> Self {
        Self {
            city: report.city.clone(),
            lat: report.lat,
            lng: report.lng,
            diseases: BTreeMap::new(),
            total_cases: 0,
        }
    }

    fn add(&mut self, report: &CaseReport) {
        let tally = self
            .diseases
            .entry(report.disease.clone())
            .or_insert(DiseaseTally {
                cases: 0,
                last_update: report.timestamp,
            });

        tally.cases += report.cases;
        tally.last_update = tally.last_update.max(report.timestamp);

        self.total_cases += report.cases;
    }

    fn finish(self) -> AggregatedLocation {
        let severity = Severity::classify(self.total_cases);

        AggregatedLocation {
            city: self.city,
            lat: self.lat,
            lng: self.lng,
            diseases: self.diseases,
            total_cases: self.total_cases,
            severity,
            color: severity.color(),
            radius: marker_radius(self.total_cases),
        }
    }
}

// 0.0 and -0.0 compare equal as floats but not as bits
fn coordinate_key(lat: f64, lng: f64) -> (u64, u64) {
    let normalize = |value: f64| if value == 0.0 { 0.0f64 } else { value };

    (normalize(lat).to_bits(), normalize(lng).to_bits())
}
