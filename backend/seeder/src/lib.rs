//! # Seeder
//!
//! Fills a running server with demo reports through the public API, one report per registry
//! city per day. Diseases rotate through the suggested list so every marker shows a mix.
//!
//! Nothing here touches the database directly; a report the server rejects is counted as a
//! failure and the run carries on.
use anyhow::Result;
use chrono::NaiveDate;
use indicatif::{ProgressBar, ProgressStyle};
use registry::{COMMON_DISEASES, CityRegistry};
use reqwest::Client;

pub mod models;
pub mod utils;

use models::{CASES_PATH, Outcome, Payload};
use utils::{date_range, endpoint, format, today};

/// Every third city reports the base count, the others half or a whole base more.
/// Saturates at `u32::MAX` instead of wrapping.
fn scaled_cases(base_cases: u32, slot: usize) -> u32 {
    let step = (slot % 3) as u64;
    let cases = u64::from(base_cases) + step * u64::from(base_cases) / 2;

    u32::try_from(cases).unwrap_or(u32::MAX)
}

pub fn plan_reports(
    today: NaiveDate,
    days_before: u32,
    days_after: u32,
    base_cases: u32,
) -> Vec<Payload> {
    let cities = CityRegistry::new();

    date_range(today, days_before, days_after)
        .into_iter()
        .enumerate()
        .flat_map(|(day, date)| {
            cities.all().iter().enumerate().map(move |(slot, city)| {
                let disease = &COMMON_DISEASES[(day + slot) % COMMON_DISEASES.len()];

                Payload {
                    disease: disease.name.to_string(),
                    city: city.name.to_string(),
                    cases: scaled_cases(base_cases, slot),
                    timestamp: format(date),
                }
            })
        })
        .collect()
}

pub async fn seed(
    base_url: &str,
    days_before: u32,
    days_after: u32,
    base_cases: u32,
) -> Result<Outcome> {
    let payloads = plan_reports(today(), days_before, days_after, base_cases);
    let url = endpoint(base_url, CASES_PATH);
    let client = Client::new();

    let pb = ProgressBar::new(payloads.len() as u64);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
        )?
        .progress_chars("=> "),
    );

    let mut outcome = Outcome::default();

    for payload in &payloads {
        pb.set_message(format!("{} {}", payload.timestamp, payload.city));

        match client.post(&url).json(payload).send().await {
            Ok(res) if res.status().is_success() => outcome.submitted += 1,
            Ok(res) => {
                let status = res.status();
                let body = res.text().await.unwrap_or_default();
                pb.println(format!("Rejected {} {}: {status} {body}", payload.city, payload.timestamp));
                outcome.failed += 1;
            }
            Err(e) => {
                pb.println(format!("Request failed for {} {}: {e}", payload.city, payload.timestamp));
                outcome.failed += 1;
            }
        }

        pb.inc(1);
    }

    pb.finish_with_message("Done");
    Ok(outcome)
}
