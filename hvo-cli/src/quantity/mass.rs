use crate::quantity::{
    currency::{Euros, EurosPerTonne},
    volume::Liters,
};

quantity!(Kilograms, via: f64, suffix: "kg", precision: 0);
quantity!(Tonnes, via: f64, suffix: "t", precision: 2);

quantity!(
    /// Emission factor: CO₂ released per liter burnt.
    KilogramsPerLiter, via: f64, suffix: "kg/L", precision: 2
);

quantity!(
    /// CO₂ mass per liter, used for the quota reduction.
    TonnesPerLiter, via: f64, suffix: "t/L", precision: 5
);

implement_mul!(Liters, KilogramsPerLiter, Kilograms);
implement_mul!(Liters, TonnesPerLiter, Tonnes);
implement_mul!(Tonnes, EurosPerTonne, Euros);

impl From<Kilograms> for Tonnes {
    fn from(kilograms: Kilograms) -> Self {
        Self(kilograms.0 / 1000.0)
    }
}

impl From<KilogramsPerLiter> for TonnesPerLiter {
    fn from(factor: KilogramsPerLiter) -> Self {
        Self(factor.0 / 1000.0)
    }
}
