use clap::Parser;
use serde::Serialize;

use crate::{
    cli::{emissions::EmissionArgs, fleet::FleetArgs, market::MarketArgs},
    core::{
        assumptions::EmissionFactors,
        fleet::FleetParameters,
        metrics::DerivedMetrics,
        scenarios::{PriceScenario, price_scenarios},
    },
    market::MarketSnapshot,
    prelude::*,
    tables::{
        build_emissions_table,
        build_finance_table,
        build_scenarios_table,
        build_snapshot_table,
    },
};

#[derive(Parser)]
pub struct CalculateArgs {
    #[clap(flatten)]
    fleet: FleetArgs,

    #[clap(flatten)]
    market: MarketArgs,

    #[clap(flatten)]
    emissions: EmissionArgs,

    /// Print the report as JSON instead of the tables.
    #[clap(long)]
    json: bool,
}

impl CalculateArgs {
    #[instrument(skip_all)]
    pub async fn run(self) -> Result {
        let snapshot = self.market.snapshot().await?;
        info!(date = %snapshot.date, source = ?snapshot.source, "got the market snapshot");

        let factors = EmissionFactors::from(self.emissions);
        let fleet = self.fleet.parameters(&snapshot);
        let metrics = DerivedMetrics::compute(&fleet, &snapshot, factors);
        let scenarios =
            price_scenarios(metrics.annual_volume, factors.reduction_per_liter(), fleet.quota_price);
        info!(net_advantage = %metrics.net_advantage, "calculated");

        if self.json {
            let report = Report { fleet, snapshot, metrics, scenarios };
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            println!("{}", build_snapshot_table(&snapshot));
            println!("{}", build_finance_table(&metrics, &snapshot));
            println!("{}", build_emissions_table(&metrics, factors));
            println!("{}", build_scenarios_table(&scenarios, fleet.quota_price));
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct Report {
    fleet: FleetParameters,
    snapshot: MarketSnapshot,
    metrics: DerivedMetrics,
    scenarios: Vec<PriceScenario>,
}
