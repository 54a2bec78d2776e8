use serde::Serialize;

use crate::{
    core::{assumptions::EmissionFactors, calculator, fleet::FleetParameters},
    market::{MarketSnapshot, behg_rate_per_liter},
    quantity::{currency::Euros, mass::Kilograms, volume::Liters},
};

/// Everything derived from the fleet and the market. Recomputed, never stored.
#[must_use]
#[derive(Copy, Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedMetrics {
    pub fuel_consuming_buses: u32,
    pub annual_volume: Liters,
    pub quota: QuotaRevenue,
    pub behg_savings: Euros,
    pub fuel_cost_delta: Euros,
    pub net_advantage: Euros,
    pub emissions: Emissions,
}

#[must_use]
#[derive(Copy, Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotaRevenue {
    /// Generated by the HVO100 burnt in the remaining diesel buses.
    pub hvo100: Euros,

    /// Generated by the diesel the electric buses displace.
    pub electric: Euros,
}

impl QuotaRevenue {
    pub fn total(self) -> Euros {
        self.hvo100 + self.electric
    }
}

#[must_use]
#[derive(Copy, Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Emissions {
    /// The fuel-consuming buses running on diesel.
    pub diesel: Kilograms,

    /// The same buses running on HVO100.
    pub hvo100: Kilograms,

    pub avoided_by_electric: Kilograms,
}

impl Emissions {
    pub fn avoided_by_hvo100(self) -> Kilograms {
        self.diesel - self.hvo100
    }
}

impl DerivedMetrics {
    pub fn compute(
        fleet: &FleetParameters,
        snapshot: &MarketSnapshot,
        factors: EmissionFactors,
    ) -> Self {
        let fuel_consuming_buses =
            calculator::fuel_consuming_bus_count(fleet.total_buses(), fleet.electric_buses());
        let annual_volume = calculator::annual_fuel_volume(
            fuel_consuming_buses,
            fleet.annual_distance,
            fleet.consumption,
        );
        let quota = QuotaRevenue {
            hvo100: calculator::quota_revenue(
                annual_volume,
                factors.reduction_per_liter(),
                fleet.quota_price,
            ),
            electric: calculator::electric_fleet_quota_revenue(
                fleet.electric_buses(),
                fleet.annual_distance,
                fleet.consumption,
                factors.diesel,
                fleet.quota_price,
            ),
        };
        let behg_savings =
            calculator::tax_exemption_savings(annual_volume, behg_rate_per_liter(Some(snapshot)));
        let fuel_cost_delta = calculator::fuel_cost_delta(
            annual_volume,
            snapshot.diesel_price,
            snapshot.hvo100_price,
        );
        Self {
            fuel_consuming_buses,
            annual_volume,
            quota,
            behg_savings,
            fuel_cost_delta,
            net_advantage: calculator::net_advantage(quota.total(), behg_savings, fuel_cost_delta),
            emissions: Emissions {
                diesel: calculator::co2_mass(annual_volume, factors.diesel),
                hvo100: calculator::co2_mass(annual_volume, factors.hvo100),
                avoided_by_electric: calculator::electric_fleet_co2_avoided(
                    fleet.electric_buses(),
                    fleet.annual_distance,
                    fleet.consumption,
                    factors.diesel,
                ),
            },
        }
    }
}
