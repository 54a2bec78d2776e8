use std::path::PathBuf;

use chrono::Utc;
use clap::Parser;
use reqwest::Url;

use crate::{
    api::tankerkoenig,
    market::{MarketSnapshot, Provider},
    prelude::*,
    quantity::currency::CentsPerLiter,
    tables::build_snapshot_table,
};

#[derive(Parser)]
pub struct MarketArgs {
    /// Tankerkönig API key. Without it, the synthetic prices of the day are used.
    #[clap(long = "tankerkoenig-api-key", env = "TANKERKOENIG_API_KEY")]
    api_key: Option<String>,

    #[clap(
        long = "tankerkoenig-url",
        env = "TANKERKOENIG_URL",
        default_value = tankerkoenig::Api::DEFAULT_URL,
    )]
    url: Url,

    /// Latitude of the station search area (Mönchengladbach by default).
    #[clap(long, default_value = "51.195", env = "LATITUDE")]
    latitude: f64,

    /// Longitude of the station search area.
    #[clap(long, default_value = "6.442", env = "LONGITUDE")]
    longitude: f64,

    /// Station search radius.
    #[clap(long = "radius-km", default_value = "5", env = "RADIUS_KM")]
    radius_km: f64,

    /// HVO100 price on top of the diesel price.
    #[clap(long = "hvo-markup-cents-per-liter", default_value = "12", env = "HVO_MARKUP_CENTS_PER_LITER")]
    hvo100_markup: CentsPerLiter,

    /// Use a previously saved snapshot JSON instead of fetching the prices.
    #[clap(long = "snapshot", env = "SNAPSHOT_PATH")]
    snapshot_path: Option<PathBuf>,
}

impl MarketArgs {
    fn provider(&self) -> Provider {
        match &self.api_key {
            Some(api_key) if !api_key.is_empty() => {
                let area = tankerkoenig::Area::builder()
                    .latitude(self.latitude)
                    .longitude(self.longitude)
                    .radius_km(self.radius_km)
                    .build();
                Provider::with_client(
                    tankerkoenig::Api::new(api_key.clone(), self.url.clone(), area),
                    self.hvo100_markup,
                )
            }
            _ => Provider::new(None, self.hvo100_markup),
        }
    }

    /// Load the snapshot from the file if specified, or fetch today's one.
    #[instrument(skip_all)]
    pub async fn snapshot(&self) -> Result<MarketSnapshot> {
        if let Some(path) = &self.snapshot_path {
            info!(path = %path.display(), "loading the snapshot…");
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read `{}`", path.display()))?;
            return MarketSnapshot::from_json(&json)
                .with_context(|| format!("`{}` is not a valid snapshot", path.display()));
        }
        Ok(self.provider().fetch(Utc::now().date_naive()).await)
    }
}

#[derive(Parser)]
pub struct MarketCommandArgs {
    #[clap(flatten)]
    market: MarketArgs,

    /// Print the snapshot as JSON, for example, to save it for `--snapshot`.
    #[clap(long)]
    json: bool,
}

impl MarketCommandArgs {
    pub async fn run(self) -> Result {
        let snapshot = self.market.snapshot().await?;
        if self.json {
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        } else {
            println!("{}", build_snapshot_table(&snapshot));
        }
        Ok(())
    }
}
