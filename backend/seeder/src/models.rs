use serde::Serialize;

pub const CASES_PATH: &str = "/api/cases";

/// Body of `POST /api/cases`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Payload {
    pub disease: String,
    pub city: String,
    pub cases: u32,
    pub timestamp: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Outcome {
    pub submitted: usize,
    pub failed: usize,
}
