use chrono::NaiveDate;

use crate::{
    market::{MarketSnapshot, Provenance},
    quantity::currency::{CentsPerLiter, EurosPerTonne},
};

/// Synthetic prices for the date: they vary from day to day, but are stable within a day.
pub fn snapshot_on(date: NaiveDate) -> MarketSnapshot {
    let seed = Seed::from(date);
    MarketSnapshot {
        quota_price: seed.quota_price(),
        behg_rate: seed.behg_rate(),
        diesel_price: seed.diesel_price(),
        hvo100_price: seed.hvo100_price(),
        date,
        source: Some(Provenance::Fallback),
    }
}

/// FNV-1a hash of the ISO date, independent bit slices of which drive the offsets.
#[derive(Copy, Clone)]
pub struct Seed(u64);

impl From<NaiveDate> for Seed {
    fn from(date: NaiveDate) -> Self {
        Self::hash(date.format("%Y-%m-%d").to_string().as_bytes())
    }
}

impl Seed {
    const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const FNV_PRIME: u64 = 0x0100_0000_01b3;

    fn hash(bytes: &[u8]) -> Self {
        Self(bytes.iter().fold(Self::FNV_OFFSET_BASIS, |hash, byte| {
            (hash ^ u64::from(*byte)).wrapping_mul(Self::FNV_PRIME)
        }))
    }

    /// Take `n_values` consecutive steps starting from `min` using the bits above `shift`.
    #[expect(clippy::cast_precision_loss)]
    const fn steps(self, shift: u32, min: u64, n_values: u64) -> f64 {
        (min + (self.0 >> shift) % n_values) as f64
    }

    /// 115…125 €/t.
    fn quota_price(self) -> EurosPerTonne {
        EurosPerTonne(self.steps(0, 115, 11))
    }

    /// 168.5 ± 5.0 ct/L.
    fn diesel_price(self) -> CentsPerLiter {
        CentsPerLiter(self.steps(16, 1635, 101) / 10.0)
    }

    /// 182.0 ± 5.0 ct/L.
    fn hvo100_price(self) -> CentsPerLiter {
        CentsPerLiter(self.steps(32, 1770, 101) / 10.0)
    }

    /// 8.16 ± 0.10 ct/L.
    fn behg_rate(self) -> CentsPerLiter {
        CentsPerLiter(self.steps(48, 806, 21) / 100.0)
    }
}
