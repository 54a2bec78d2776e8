use bon::bon;
use serde::Serialize;

use crate::quantity::{currency::EurosPerTonne, distance::Kilometers, volume::LitersPer100Km};

/// User-supplied fleet parameters.
///
/// The electric bus count never exceeds the total: every write clamps it.
#[must_use]
#[derive(Copy, Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetParameters {
    total_buses: u32,
    electric_buses: u32,
    pub annual_distance: Kilometers,
    pub consumption: LitersPer100Km,
    pub quota_price: EurosPerTonne,
}

#[bon]
impl FleetParameters {
    pub const DEFAULT_TOTAL_BUSES: u32 = 50;
    pub const DEFAULT_ANNUAL_DISTANCE: Kilometers = Kilometers(45_000.0);
    pub const DEFAULT_CONSUMPTION: LitersPer100Km = LitersPer100Km(38.0);
    pub const DEFAULT_QUOTA_PRICE: EurosPerTonne = EurosPerTonne(120.0);

    #[builder]
    pub fn new(
        total_buses: u32,
        #[builder(default)] electric_buses: u32,
        annual_distance: Kilometers,
        consumption: LitersPer100Km,
        quota_price: EurosPerTonne,
    ) -> Self {
        Self {
            total_buses,
            electric_buses: electric_buses.min(total_buses),
            annual_distance,
            consumption,
            quota_price,
        }
    }

    #[must_use]
    pub const fn total_buses(&self) -> u32 {
        self.total_buses
    }

    #[must_use]
    pub const fn electric_buses(&self) -> u32 {
        self.electric_buses
    }

    /// Shrinking the fleet pulls the electric bus count down with it.
    pub fn set_total_buses(&mut self, total_buses: u32) {
        self.total_buses = total_buses;
        self.electric_buses = self.electric_buses.min(total_buses);
    }

    pub fn set_electric_buses(&mut self, electric_buses: u32) {
        self.electric_buses = electric_buses.min(self.total_buses);
    }
}

impl Default for FleetParameters {
    fn default() -> Self {
        Self::builder()
            .total_buses(Self::DEFAULT_TOTAL_BUSES)
            .annual_distance(Self::DEFAULT_ANNUAL_DISTANCE)
            .consumption(Self::DEFAULT_CONSUMPTION)
            .quota_price(Self::DEFAULT_QUOTA_PRICE)
            .build()
    }
}
