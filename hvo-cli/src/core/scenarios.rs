use itertools::Itertools;
use serde::Serialize;

use crate::{
    core::calculator::quota_revenue,
    quantity::{
        currency::{Euros, EurosPerTonne},
        mass::TonnesPerLiter,
        volume::Liters,
    },
};

/// Quota revenue of the HVO100 volume at a given quota price.
#[must_use]
#[derive(Copy, Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceScenario {
    pub quota_price: EurosPerTonne,
    pub revenue: Euros,
}

const GRID: [EurosPerTonne; 5] = [
    EurosPerTonne(100.0),
    EurosPerTonne(110.0),
    EurosPerTonne(120.0),
    EurosPerTonne(130.0),
    EurosPerTonne(140.0),
];

/// Revenue over the fixed price grid and the current quota price, in ascending price order.
pub fn price_scenarios(
    volume: Liters,
    reduction_per_liter: TonnesPerLiter,
    current_price: EurosPerTonne,
) -> Vec<PriceScenario> {
    GRID.into_iter()
        .chain([current_price])
        .sorted()
        .dedup()
        .map(|quota_price| PriceScenario {
            quota_price,
            revenue: quota_revenue(volume, reduction_per_liter, quota_price),
        })
        .collect()
}
