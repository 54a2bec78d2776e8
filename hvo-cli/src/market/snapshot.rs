use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    prelude::*,
    quantity::currency::{CentsPerLiter, EurosPerTonne},
};

/// Prices of the day. Replaced as a whole on every fetch.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    #[serde(rename = "quotaPriceEurPerTonne")]
    pub quota_price: EurosPerTonne,

    #[serde(rename = "behgCentsPerLiter")]
    pub behg_rate: CentsPerLiter,

    #[serde(rename = "dieselCentsPerLiter")]
    pub diesel_price: CentsPerLiter,

    #[serde(rename = "hvo100CentsPerLiter")]
    pub hvo100_price: CentsPerLiter,

    pub date: NaiveDate,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Provenance>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    /// Diesel price averaged from the Tankerkönig stations.
    Live,

    /// Date-seeded synthetic prices.
    Fallback,
}

impl MarketSnapshot {
    pub const DEFAULT_BEHG_RATE: CentsPerLiter = CentsPerLiter(8.16);
    pub const DEFAULT_QUOTA_PRICE: EurosPerTonne = EurosPerTonne(120.0);

    const REQUIRED_NUMBERS: [&'static str; 4] = [
        "quotaPriceEurPerTonne",
        "behgCentsPerLiter",
        "dieselCentsPerLiter",
        "hvo100CentsPerLiter",
    ];

    /// Parse a snapshot that came from outside, for example, from a file.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json).context("the snapshot is not valid JSON")?;
        ensure!(
            is_valid_snapshot(&value),
            "the snapshot must contain numeric {} and a string `date`",
            Self::REQUIRED_NUMBERS.map(|name| format!("`{name}`")).join(", "),
        );
        serde_json::from_value(value).context("failed to deserialize the snapshot")
    }
}

/// Structural check of untrusted data: four numeric prices and a date string.
#[must_use]
pub fn is_valid_snapshot(candidate: &Value) -> bool {
    let Some(object) = candidate.as_object() else {
        return false;
    };
    MarketSnapshot::REQUIRED_NUMBERS
        .iter()
        .all(|name| object.get(*name).is_some_and(Value::is_number))
        && object.get("date").is_some_and(Value::is_string)
}

/// BEHG exemption rate, or the statutory default when there is no usable snapshot.
pub fn behg_rate_per_liter(snapshot: Option<&MarketSnapshot>) -> CentsPerLiter {
    snapshot
        .map(|snapshot| snapshot.behg_rate)
        .filter(|rate| rate.0.is_finite() && rate.0 >= 0.0)
        .unwrap_or(MarketSnapshot::DEFAULT_BEHG_RATE)
}

/// THG quota price, or the default when there is no usable snapshot.
pub fn quota_price(snapshot: Option<&MarketSnapshot>) -> EurosPerTonne {
    snapshot
        .map(|snapshot| snapshot.quota_price)
        .filter(|price| price.0.is_finite() && price.0 >= 0.0)
        .unwrap_or(MarketSnapshot::DEFAULT_QUOTA_PRICE)
}
