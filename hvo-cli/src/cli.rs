mod calculate;
mod emissions;
mod fleet;
mod market;

use clap::{Parser, Subcommand};

use crate::{
    cli::{calculate::CalculateArgs, market::MarketCommandArgs},
    prelude::*,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    pub async fn run(self) -> Result {
        match self.command {
            Command::Calculate(args) => args.run().await,
            Command::Market(args) => args.run().await,
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Main command: fetch the prices and estimate the switch to HVO100.
    #[clap(name = "calculate")]
    Calculate(Box<CalculateArgs>),

    /// Only fetch and show the market prices of the day.
    #[clap(name = "market")]
    Market(Box<MarketCommandArgs>),
}
