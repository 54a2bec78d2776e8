//! Closed-form fleet formulas.
//!
//! Every function here is total: a blank (zero or NaN) required input yields exactly zero,
//! so half-entered parameters never turn into `NaN` figures.

use crate::quantity::{
    currency::{CentsPerLiter, Euros, EurosPerTonne},
    distance::Kilometers,
    mass::{Kilograms, KilogramsPerLiter, Tonnes, TonnesPerLiter},
    volume::{Liters, LitersPer100Km},
};

/// Fuel burnt by the buses in a year.
pub fn annual_fuel_volume(
    bus_count: u32,
    annual_distance: Kilometers,
    consumption: LitersPer100Km,
) -> Liters {
    if bus_count == 0 || annual_distance.is_blank() || consumption.is_blank() {
        return Liters::ZERO;
    }
    Liters(f64::from(bus_count) * consumption.over(annual_distance).0)
}

/// Buses that still burn fuel.
#[must_use]
pub const fn fuel_consuming_bus_count(total_buses: u32, electric_buses: u32) -> u32 {
    total_buses.saturating_sub(electric_buses)
}

/// THG quota revenue for the fuel volume, mass-based.
///
/// `volume × reduction_per_liter × quota_price`, where the reduction is the CO₂ mass avoided
/// per liter.
///
/// The alternative, percentage-based convention prices the quota in cents per 1000 L:
/// `(reduction% / 100 × volume / 1000) × cents_per_kiloliter / 100`. It produces materially
/// different figures and is deliberately not supported here.
pub fn quota_revenue(
    volume: Liters,
    reduction_per_liter: TonnesPerLiter,
    quota_price: EurosPerTonne,
) -> Euros {
    if volume.is_blank() || reduction_per_liter.is_blank() || quota_price.is_blank() {
        return Euros::ZERO;
    }
    (volume * reduction_per_liter) * quota_price
}

/// BEHG surcharge not paid on HVO100.
pub fn tax_exemption_savings(volume: Liters, exemption_rate: CentsPerLiter) -> Euros {
    if volume.is_blank() || exemption_rate.is_blank() {
        return Euros::ZERO;
    }
    volume * exemption_rate
}

/// Extra fuel spend of the alternative fuel, negative when it is cheaper.
pub fn fuel_cost_delta(
    volume: Liters,
    base_price: CentsPerLiter,
    alternative_price: CentsPerLiter,
) -> Euros {
    if volume.is_blank() || base_price.is_blank() || alternative_price.is_blank() {
        return Euros::ZERO;
    }
    volume * (alternative_price - base_price)
}

pub fn net_advantage(quota_revenue_total: Euros, tax_savings: Euros, cost_delta: Euros) -> Euros {
    quota_revenue_total + tax_savings - cost_delta
}

pub fn co2_mass(volume: Liters, emission_factor: KilogramsPerLiter) -> Kilograms {
    if volume.is_blank() || emission_factor.is_blank() {
        return Kilograms::ZERO;
    }
    volume * emission_factor
}

/// Diesel CO₂ the electric buses do not emit, crediting full diesel displacement.
pub fn electric_fleet_co2_avoided(
    electric_buses: u32,
    annual_distance: Kilometers,
    consumption: LitersPer100Km,
    diesel_emission_factor: KilogramsPerLiter,
) -> Kilograms {
    co2_mass(annual_fuel_volume(electric_buses, annual_distance, consumption), diesel_emission_factor)
}

/// Quota revenue for the displaced diesel CO₂ of the electric buses.
pub fn electric_fleet_quota_revenue(
    electric_buses: u32,
    annual_distance: Kilometers,
    consumption: LitersPer100Km,
    diesel_emission_factor: KilogramsPerLiter,
    quota_price: EurosPerTonne,
) -> Euros {
    if quota_price.is_blank() {
        return Euros::ZERO;
    }
    let avoided = electric_fleet_co2_avoided(
        electric_buses,
        annual_distance,
        consumption,
        diesel_emission_factor,
    );
    Tonnes::from(avoided) * quota_price
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::core::assumptions::EmissionFactors;

    const DISTANCE: Kilometers = Kilometers(45_000.0);
    const CONSUMPTION: LitersPer100Km = LitersPer100Km(38.0);
    const QUOTA_PRICE: EurosPerTonne = EurosPerTonne(120.0);
    const BEHG: CentsPerLiter = CentsPerLiter(8.16);
    const DIESEL: CentsPerLiter = CentsPerLiter(168.5);
    const HVO100: CentsPerLiter = CentsPerLiter(182.0);

    fn reduction() -> TonnesPerLiter {
        EmissionFactors::default().reduction_per_liter()
    }

    #[test]
    fn test_annual_fuel_volume() {
        assert_abs_diff_eq!(annual_fuel_volume(50, DISTANCE, CONSUMPTION).0, 855_000.0);
        assert_abs_diff_eq!(annual_fuel_volume(1, Kilometers(100.0), CONSUMPTION).0, 38.0);
    }

    #[test]
    fn test_annual_fuel_volume_blank() {
        assert_eq!(annual_fuel_volume(0, DISTANCE, CONSUMPTION), Liters::ZERO);
        assert_eq!(annual_fuel_volume(50, Kilometers::ZERO, CONSUMPTION), Liters::ZERO);
        assert_eq!(annual_fuel_volume(50, DISTANCE, LitersPer100Km::ZERO), Liters::ZERO);
        assert_eq!(annual_fuel_volume(50, Kilometers(f64::NAN), CONSUMPTION), Liters::ZERO);
        assert_eq!(annual_fuel_volume(50, Kilometers(f64::INFINITY), CONSUMPTION), Liters::ZERO);
    }

    #[test]
    fn test_fuel_consuming_bus_count() {
        assert_eq!(fuel_consuming_bus_count(50, 0), 50);
        assert_eq!(fuel_consuming_bus_count(50, 10), 40);
        assert_eq!(fuel_consuming_bus_count(5, 10), 0);
    }

    #[test]
    fn test_blank_inputs_yield_zero() {
        let volume = Liters(8550.0);
        assert_eq!(quota_revenue(Liters::ZERO, reduction(), QUOTA_PRICE), Euros::ZERO);
        assert_eq!(quota_revenue(volume, reduction(), EurosPerTonne::ZERO), Euros::ZERO);
        assert_eq!(quota_revenue(volume, TonnesPerLiter::ZERO, QUOTA_PRICE), Euros::ZERO);
        assert_eq!(tax_exemption_savings(Liters::ZERO, BEHG), Euros::ZERO);
        assert_eq!(tax_exemption_savings(volume, CentsPerLiter::ZERO), Euros::ZERO);
        assert_eq!(fuel_cost_delta(Liters::ZERO, DIESEL, HVO100), Euros::ZERO);
        assert_eq!(fuel_cost_delta(volume, CentsPerLiter::ZERO, HVO100), Euros::ZERO);
        assert_eq!(fuel_cost_delta(volume, DIESEL, CentsPerLiter::ZERO), Euros::ZERO);
        assert_eq!(fuel_cost_delta(volume, DIESEL, CentsPerLiter(f64::NAN)), Euros::ZERO);
    }

    #[test]
    fn test_net_advantage() {
        assert_eq!(net_advantage(Euros(1.0), Euros(2.0), Euros(4.0)), Euros(-1.0));
        assert_eq!(net_advantage(Euros(1.0), Euros(2.0), Euros(-4.0)), Euros(7.0));
    }

    #[test]
    fn test_co2_mass_is_linear() {
        let factor = EmissionFactors::default().diesel;
        assert_eq!(co2_mass(Liters(2.0 * 1234.5), factor), co2_mass(Liters(1234.5), factor) * 2.0);
    }

    /// The reference scenario at formula level, with 8550 L.
    #[test]
    fn test_reference_figures() {
        let volume = Liters(8550.0);
        let quota = quota_revenue(volume, reduction(), QUOTA_PRICE);
        let tax = tax_exemption_savings(volume, BEHG);
        let delta = fuel_cost_delta(volume, DIESEL, HVO100);
        assert_abs_diff_eq!(quota.0, 2513.70, epsilon = 1e-6);
        assert_abs_diff_eq!(tax.0, 697.68, epsilon = 1e-6);
        assert_abs_diff_eq!(delta.0, 1154.25, epsilon = 1e-6);
        assert_abs_diff_eq!(net_advantage(quota, tax, delta).0, 2057.13, epsilon = 1e-6);
    }

    #[test]
    fn test_full_fleet() {
        let volume = annual_fuel_volume(fuel_consuming_bus_count(50, 0), DISTANCE, CONSUMPTION);
        let quota = quota_revenue(volume, reduction(), QUOTA_PRICE);
        let tax = tax_exemption_savings(volume, BEHG);
        let delta = fuel_cost_delta(volume, DIESEL, HVO100);
        assert_abs_diff_eq!(quota.0, 251_370.0, epsilon = 1e-4);
        assert_abs_diff_eq!(tax.0, 69_768.0, epsilon = 1e-4);
        assert_abs_diff_eq!(delta.0, 115_425.0, epsilon = 1e-4);
        assert_abs_diff_eq!(net_advantage(quota, tax, delta).0, 205_713.0, epsilon = 1e-4);
    }

    #[test]
    fn test_electric_fleet() {
        let diesel = EmissionFactors::default().diesel;
        assert_abs_diff_eq!(
            electric_fleet_co2_avoided(10, DISTANCE, CONSUMPTION, diesel).0,
            453_150.0,
            epsilon = 1e-6
        );
        assert_abs_diff_eq!(
            electric_fleet_quota_revenue(10, DISTANCE, CONSUMPTION, diesel, QUOTA_PRICE).0,
            54_378.0,
            epsilon = 1e-6
        );
        assert_eq!(electric_fleet_co2_avoided(0, DISTANCE, CONSUMPTION, diesel), Kilograms::ZERO);
        assert_eq!(
            electric_fleet_quota_revenue(10, DISTANCE, CONSUMPTION, diesel, EurosPerTonne::ZERO),
            Euros::ZERO
        );
    }
}
