use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

/// Ingest payload for one print job, keyed by the printer's stable job id.
///
/// Field handling follows the scraper contract: a missing title becomes `""`,
/// timestamps arrive without a zone suffix, and weights may arrive as JSON
/// numbers or numeric strings. A weight that fails to parse is dropped so one
/// malformed slot never rejects the whole job.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct PrintUpsert {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub cover: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub start_time: Option<NaiveDateTime>,
    #[serde(default)]
    pub end_time: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub total_weight: Option<f64>,
    #[serde(default)]
    pub filament_1_material: Option<String>,
    #[serde(default)]
    pub filament_1_colour: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub filament_1_weight: Option<f64>,
    #[serde(default)]
    pub filament_2_material: Option<String>,
    #[serde(default)]
    pub filament_2_colour: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub filament_2_weight: Option<f64>,
    #[serde(default)]
    pub filament_3_material: Option<String>,
    #[serde(default)]
    pub filament_3_colour: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub filament_3_weight: Option<f64>,
    #[serde(default)]
    pub filament_4_material: Option<String>,
    #[serde(default)]
    pub filament_4_colour: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub filament_4_weight: Option<f64>,
    #[serde(default)]
    pub claimed_by: Option<String>,
}

/// The ingest endpoint accepts a single job or a batch.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(untagged)]
pub enum PrintUpsertBody {
    One(PrintUpsert),
    Many(Vec<PrintUpsert>),
}

impl PrintUpsertBody {
    pub fn into_vec(self) -> Vec<PrintUpsert> {
        match self {
            PrintUpsertBody::One(print) => vec![print],
            PrintUpsertBody::Many(prints) => prints,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct ClaimRequest {
    #[serde(default)]
    pub user: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct PrintsQuery {
    #[serde(default)]
    pub claimed: Option<bool>,
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(number)) => number.as_f64(),
        Some(serde_json::Value::String(text)) => text.trim().parse().ok(),
        _ => None,
    })
}
