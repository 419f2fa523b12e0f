use serde::Serialize;
use ts_rs::TS;

use crate::models::analysis::HccCondition;

/// How many conditions the top-conditions panel shows.
const TOP_CONDITION_COUNT: usize = 3;

/// Aggregates derived from an extracted condition list.
///
/// `total_weight` sums the individual condition weights with missing weights
/// counted as zero. It is deliberately not the report's total RAF score: the
/// model may have found a stated total that the condition list does not add
/// up to, and conflating the two hides documentation gaps.
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ConditionStatistics {
    /// Number of conditions identified.
    pub count: usize,
    /// Up to three conditions with the highest risk weight, heaviest first.
    pub top_conditions: Vec<HccCondition>,
    /// Sum of all condition weights, missing weights counted as zero.
    pub total_weight: f64,
    /// `total_weight` rendered with exactly three decimal places.
    pub formatted_weight: String,
}

/// Derive display statistics from an extracted condition list.
///
/// The input is never reordered. Ties in weight keep their input order, so
/// two conditions with the same weight surface in the order the model
/// listed them.
pub fn derive_statistics(conditions: &[HccCondition]) -> ConditionStatistics {
    let mut ranked = conditions.to_vec();
    ranked.sort_by(|a, b| effective_weight(b).total_cmp(&effective_weight(a)));
    ranked.truncate(TOP_CONDITION_COUNT);

    // Fold from positive zero: an empty `sum()` is -0.0, which renders
    // as "-0.000".
    let total_weight = conditions
        .iter()
        .map(effective_weight)
        .fold(0.0, |sum, weight| sum + weight);

    ConditionStatistics {
        count: conditions.len(),
        top_conditions: ranked,
        total_weight,
        formatted_weight: format!("{total_weight:.3}"),
    }
}

fn effective_weight(condition: &HccCondition) -> f64 {
    condition.weight.unwrap_or(0.0)
}
