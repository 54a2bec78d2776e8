use std::ops::Mul;

use crate::quantity::volume::Liters;

quantity!(Euros, via: f64, suffix: "€", precision: 2);

quantity!(
    /// Fuel prices and the BEHG surcharge are quoted in cents per liter.
    CentsPerLiter, via: f64, suffix: "ct/L", precision: 2
);

quantity!(
    /// THG quota price per tonne of CO₂ reduction.
    EurosPerTonne, via: f64, suffix: "€/t", precision: 2
);

impl Euros {
    pub const ONE_CENT: Self = Self(0.01);
}

impl CentsPerLiter {
    /// Round to whole cents.
    pub fn round(self) -> Self {
        Self(self.0.round())
    }
}

impl Mul<CentsPerLiter> for Liters {
    type Output = Euros;

    fn mul(self, rate: CentsPerLiter) -> Self::Output {
        Euros((self.0 * rate.0) / 100.0)
    }
}
