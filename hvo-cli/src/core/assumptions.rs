use crate::quantity::mass::{KilogramsPerLiter, TonnesPerLiter};

/// Well-to-wheel CO₂ emission factors of the two fuels.
#[must_use]
#[derive(Copy, Clone, Debug)]
pub struct EmissionFactors {
    pub diesel: KilogramsPerLiter,
    pub hvo100: KilogramsPerLiter,
}

impl Default for EmissionFactors {
    fn default() -> Self {
        Self { diesel: KilogramsPerLiter(2.65), hvo100: KilogramsPerLiter(0.20) }
    }
}

impl EmissionFactors {
    /// CO₂ avoided per liter of diesel replaced by HVO100.
    ///
    /// With the default factors this is 0.00245 t/L, the ~92.5% reduction being implied by the pair.
    pub fn reduction_per_liter(self) -> TonnesPerLiter {
        TonnesPerLiter::from(self.diesel - self.hvo100)
    }

    /// Relative reduction, `0.0..=1.0`.
    #[must_use]
    pub fn reduction_ratio(self) -> f64 {
        if self.diesel.is_blank() { 0.0 } else { (self.diesel - self.hvo100).0 / self.diesel.0 }
    }
}
