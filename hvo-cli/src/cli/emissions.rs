use clap::Parser;

use crate::{core::assumptions::EmissionFactors, quantity::mass::KilogramsPerLiter};

#[derive(Copy, Clone, Parser)]
pub struct EmissionArgs {
    /// Diesel CO₂ emission factor.
    #[clap(long = "diesel-kg-co2-per-liter", default_value = "2.65", env = "DIESEL_KG_CO2_PER_LITER")]
    pub diesel: KilogramsPerLiter,

    /// HVO100 CO₂ emission factor.
    #[clap(long = "hvo-kg-co2-per-liter", default_value = "0.2", env = "HVO_KG_CO2_PER_LITER")]
    pub hvo100: KilogramsPerLiter,
}

impl From<EmissionArgs> for EmissionFactors {
    fn from(args: EmissionArgs) -> Self {
        Self { diesel: args.diesel, hvo100: args.hvo100 }
    }
}
