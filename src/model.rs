use chrono::{serde::ts_milliseconds, DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;

/// One row of the `prints` table, one physical print job.
///
/// `status` is whatever label the printer reported; nothing here interprets
/// it. `claimed_by` is the only field end users can mutate, and only through
/// the claim/unclaim operations.
#[derive(Serialize, Deserialize, Clone, Debug, Default, FromRow)]
pub struct Print {
    pub id: String,
    pub title: String,
    pub cover: Option<String>,
    pub status: String,
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
    /// Printer-reported total, kept independent of the slot weights.
    pub total_weight: Option<f64>,
    pub filament_1_material: Option<String>,
    pub filament_1_colour: Option<String>,
    pub filament_1_weight: Option<f64>,
    pub filament_2_material: Option<String>,
    pub filament_2_colour: Option<String>,
    pub filament_2_weight: Option<f64>,
    pub filament_3_material: Option<String>,
    pub filament_3_colour: Option<String>,
    pub filament_3_weight: Option<f64>,
    pub filament_4_material: Option<String>,
    pub filament_4_colour: Option<String>,
    pub filament_4_weight: Option<f64>,
    pub claimed_by: Option<String>,
    #[serde(with = "ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "ts_milliseconds")]
    pub updated_at: DateTime<Utc>,
}

impl Print {
    /// The four filament slots as (material, colour, weight) triples, in
    /// slot order. Multi-material prints fill more than one.
    pub fn filament_slots(&self) -> [(Option<&str>, Option<&str>, Option<f64>); 4] {
        [
            (
                self.filament_1_material.as_deref(),
                self.filament_1_colour.as_deref(),
                self.filament_1_weight,
            ),
            (
                self.filament_2_material.as_deref(),
                self.filament_2_colour.as_deref(),
                self.filament_2_weight,
            ),
            (
                self.filament_3_material.as_deref(),
                self.filament_3_colour.as_deref(),
                self.filament_3_weight,
            ),
            (
                self.filament_4_material.as_deref(),
                self.filament_4_colour.as_deref(),
                self.filament_4_weight,
            ),
        ]
    }
}
