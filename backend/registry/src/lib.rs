//! # Registry
//!
//! Static reference data shared by the server and the seeder.
//!
//! - [`cities`]: the fixed set of reportable cities and their coordinates. Reports are validated
//!   and enriched against it at submission time.
//! - [`diseases`]: suggested disease names for the report form. Advisory only, submissions
//!   accept free text.
//!
//! Everything here is immutable and lives for the whole process.

pub mod cities;
pub mod diseases;

pub use cities::{CityEntry, CityRegistry};
pub use diseases::{COMMON_DISEASES, Disease};
