use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Upserted {
    pub success: bool,
    pub count: usize,
}

/// Per-user filament consumption over all claimed prints.
///
/// `all_filaments` is the sorted union of filament keys seen across users so
/// a report table can render a uniform set of columns.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct FilamentUsage {
    pub summary: Vec<UserUsage>,
    pub all_filaments: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UserUsage {
    pub user: String,
    /// Grams per filament key (`"{material} - {colour}"`), full precision.
    pub filaments: BTreeMap<String, f64>,
    /// Rounded to one decimal place.
    pub total_weight: f64,
    /// Rounded to two decimal places.
    pub total_cost: f64,
}
