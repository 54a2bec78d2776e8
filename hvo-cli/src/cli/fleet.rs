use clap::Parser;

use crate::{
    core::fleet::FleetParameters,
    market::{MarketSnapshot, quota_price},
    quantity::{currency::EurosPerTonne, distance::Kilometers, volume::LitersPer100Km},
};

#[derive(Copy, Clone, Parser)]
pub struct FleetArgs {
    /// Total number of buses in the fleet.
    #[clap(long = "buses", default_value = "50", env = "BUSES")]
    pub total_buses: u32,

    /// How many of them are fully electric. Capped at the total.
    #[clap(long, default_value = "0", env = "ELECTRIC_BUSES")]
    pub electric_buses: u32,

    /// Annual distance per bus.
    #[clap(long = "annual-distance-km", default_value = "45000", env = "ANNUAL_DISTANCE_KM")]
    pub annual_distance: Kilometers,

    /// Diesel consumption.
    #[clap(long = "liters-per-100-km", default_value = "38", env = "LITERS_PER_100_KM")]
    pub consumption: LitersPer100Km,

    /// THG quota price. Defaults to the market price of the day.
    #[clap(long = "quota-price-eur-per-tonne", env = "QUOTA_PRICE_EUR_PER_TONNE")]
    pub quota_price: Option<EurosPerTonne>,
}

impl FleetArgs {
    pub fn parameters(&self, snapshot: &MarketSnapshot) -> FleetParameters {
        FleetParameters::builder()
            .total_buses(self.total_buses)
            .electric_buses(self.electric_buses)
            .annual_distance(self.annual_distance)
            .consumption(self.consumption)
            .quota_price(self.quota_price.unwrap_or_else(|| quota_price(Some(snapshot))))
            .build()
    }
}
