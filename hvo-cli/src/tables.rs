use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    core::{assumptions::EmissionFactors, metrics::DerivedMetrics, scenarios::PriceScenario},
    fmt::{FormattedPercentage, format_date},
    market::{MarketSnapshot, Provenance, behg_rate_per_liter},
    quantity::{
        currency::{Euros, EurosPerTonne},
        mass::Tonnes,
    },
};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

fn money(amount: Euros) -> Cell {
    Cell::new(amount).set_alignment(CellAlignment::Right)
}

pub fn build_snapshot_table(snapshot: &MarketSnapshot) -> Table {
    let date = snapshot.date.format("%Y-%m-%d").to_string();
    let (source, source_color) = match snapshot.source {
        Some(Provenance::Live) => ("Tankerkönig", Color::Green),
        Some(Provenance::Fallback) => ("fallback", Color::DarkYellow),
        None => ("imported", Color::Reset),
    };
    let mut table = new_table();
    table
        .set_header(vec!["Date", "Source", "Diesel", "HVO100", "BEHG", "THG quota"])
        .add_row(vec![
            Cell::new(format_date(Some(&date))),
            Cell::new(source).fg(source_color),
            Cell::new(snapshot.diesel_price).set_alignment(CellAlignment::Right),
            Cell::new(snapshot.hvo100_price).set_alignment(CellAlignment::Right),
            Cell::new(behg_rate_per_liter(Some(snapshot))).set_alignment(CellAlignment::Right),
            Cell::new(snapshot.quota_price).set_alignment(CellAlignment::Right),
        ]);
    table
}

pub fn build_finance_table(metrics: &DerivedMetrics, snapshot: &MarketSnapshot) -> Table {
    let net_color = if metrics.net_advantage >= Euros::ZERO { Color::Green } else { Color::Red };
    let mut table = new_table();
    table.set_header(vec!["Annual effect", "Amount", "Basis"]);
    table
        .add_row(vec![
            Cell::new("THG quota (HVO100)"),
            money(metrics.quota.hvo100).fg(Color::Green),
            Cell::new(metrics.annual_volume).add_attribute(Attribute::Dim),
        ])
        .add_row(vec![
            Cell::new("THG quota (electric)"),
            money(metrics.quota.electric).fg(Color::Green),
            Cell::new(Tonnes::from(metrics.emissions.avoided_by_electric))
                .add_attribute(Attribute::Dim),
        ])
        .add_row(vec![
            Cell::new("BEHG savings"),
            money(metrics.behg_savings).fg(Color::Blue),
            Cell::new(behg_rate_per_liter(Some(snapshot))).add_attribute(Attribute::Dim),
        ])
        .add_row(vec![
            Cell::new("Fuel extra cost"),
            money(-metrics.fuel_cost_delta).fg(if metrics.fuel_cost_delta >= Euros::ONE_CENT {
                Color::Red
            } else {
                Color::Green
            }),
            Cell::new(snapshot.hvo100_price - snapshot.diesel_price).add_attribute(Attribute::Dim),
        ])
        .add_row(vec![
            Cell::new("Net advantage").add_attribute(Attribute::Bold),
            money(metrics.net_advantage).fg(net_color).add_attribute(Attribute::Bold),
            Cell::new(if metrics.net_advantage >= Euros::ZERO { "per year" } else { "loss" })
                .fg(net_color),
        ]);
    table
}

pub fn build_emissions_table(metrics: &DerivedMetrics, factors: EmissionFactors) -> Table {
    let emissions = metrics.emissions;
    let mut table = new_table();
    table
        .set_header(vec!["Diesel CO₂", "HVO100 CO₂", "Avoided by HVO100", "Avoided by e-buses"])
        .add_row(vec![
            Cell::new(Tonnes::from(emissions.diesel)).fg(Color::Red),
            Cell::new(Tonnes::from(emissions.hvo100)).fg(Color::DarkYellow),
            Cell::new(format!(
                "{} ({})",
                Tonnes::from(emissions.avoided_by_hvo100()),
                FormattedPercentage(factors.reduction_ratio()),
            ))
            .fg(Color::Green),
            Cell::new(Tonnes::from(emissions.avoided_by_electric)).fg(Color::Green),
        ]);
    table
}

pub fn build_scenarios_table(scenarios: &[PriceScenario], current_price: EurosPerTonne) -> Table {
    let mut table = new_table();
    table.set_header(vec!["THG quota price", "THG quota revenue (HVO100)"]);
    for scenario in scenarios {
        let price = Cell::new(scenario.quota_price).set_alignment(CellAlignment::Right);
        let price = if scenario.quota_price == current_price {
            price.add_attribute(Attribute::Bold)
        } else {
            price.add_attribute(Attribute::Dim)
        };
        table.add_row(vec![price, money(scenario.revenue)]);
    }
    table
}
