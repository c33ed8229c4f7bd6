use std::collections::{BTreeMap, BTreeSet};

use api::response::{FilamentUsage, UserUsage};

use crate::model::Print;

/// 20 currency units per 1000 g spool.
pub const COST_PER_GRAM: f64 = 20.0 / 1000.0;

/// Folds claimed prints into a per-user filament report.
///
/// A slot counts only when material and colour are both present and the
/// weight is positive. Accumulation runs at full precision; the totals are
/// rounded here, at the response boundary, and nowhere earlier.
pub fn aggregate(prints: &[Print]) -> FilamentUsage {
    let mut usage: BTreeMap<&str, BTreeMap<String, f64>> = BTreeMap::new();
    let mut filaments = BTreeSet::new();

    for print in prints {
        let Some(user) = print.claimed_by.as_deref() else {
            continue;
        };
        for (material, colour, weight) in print.filament_slots() {
            let (Some(material), Some(colour)) = (material, colour) else {
                continue;
            };
            let weight = weight.unwrap_or(0.0);
            if material.is_empty() || colour.is_empty() || weight <= 0.0 {
                continue;
            }
            let key = format!("{} - {}", material, colour);
            filaments.insert(key.clone());
            *usage.entry(user).or_default().entry(key).or_insert(0.0) += weight;
        }
    }

    let summary = usage
        .into_iter()
        .map(|(user, filaments)| {
            let total_weight: f64 = filaments.values().sum();
            UserUsage {
                user: user.to_string(),
                filaments,
                total_weight: (total_weight * 10.0).round() / 10.0,
                total_cost: (total_weight * COST_PER_GRAM * 100.0).round() / 100.0,
            }
        })
        .collect();

    FilamentUsage {
        summary,
        all_filaments: filaments.into_iter().collect(),
    }
}
