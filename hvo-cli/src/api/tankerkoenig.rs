use std::time::Duration;

use bon::Builder;
use reqwest::Url;
use serde::Deserialize;
use serde_json::Value;

use crate::{prelude::*, quantity::currency::CentsPerLiter};

/// [Tankerkönig](https://creativecommons.tankerkoenig.de) station listing client.
pub struct Api {
    client: reqwest::Client,
    api_key: String,
    url: Url,
    area: Area,
}

/// Circle to search the stations in.
#[must_use]
#[derive(Copy, Clone, Debug, Builder)]
pub struct Area {
    pub latitude: f64,
    pub longitude: f64,
    pub radius_km: f64,
}

impl Api {
    pub const DEFAULT_URL: &'static str = "https://creativecommons.tankerkoenig.de/json/list.php";

    pub fn new(api_key: String, url: Url, area: Area) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("hvo")
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self { client, api_key, url, area })
    }

    /// Mean diesel price of the stations around, rounded to whole cents.
    ///
    /// Returns [`None`] when no station reports a usable price.
    #[instrument(skip_all, fields(url = %self.url))]
    pub async fn get_mean_diesel_price(&self) -> Result<Option<CentsPerLiter>> {
        info!(area = ?self.area, "fetching…");
        let response: Response = self
            .client
            .get(self.list_url())
            .send()
            .await
            .context("failed to request the station list")?
            .error_for_status()
            .context("the station list request failed")?
            .json()
            .await
            .context("failed to deserialize the station list")?;
        let mean_price = response.mean_diesel_price();
        info!(n_stations = response.stations.len(), ?mean_price, "fetched");
        Ok(mean_price)
    }

    fn list_url(&self) -> Url {
        let mut url = self.url.clone();
        url.query_pairs_mut()
            .append_pair("lat", &self.area.latitude.to_string())
            .append_pair("lng", &self.area.longitude.to_string())
            .append_pair("rad", &self.area.radius_km.to_string())
            .append_pair("sort", "dist")
            .append_pair("type", "diesel")
            .append_pair("apikey", &self.api_key);
        url
    }
}

#[derive(Deserialize)]
struct Response {
    #[serde(default)]
    stations: Vec<Station>,
}

#[derive(Deserialize)]
struct Station {
    /// Euro per liter. Closed stations report `false` or `null` here.
    #[serde(default)]
    diesel: Value,
}

impl Response {
    fn mean_diesel_price(&self) -> Option<CentsPerLiter> {
        let (sum, count) = self
            .stations
            .iter()
            .filter_map(|station| station.diesel.as_f64())
            .filter(|price| price.is_finite() && *price > 0.0)
            .fold((0.0, 0_u32), |(sum, count), price| (sum + price, count + 1));
        (count != 0).then(|| CentsPerLiter(sum / f64::from(count) * 100.0).round())
    }
}
