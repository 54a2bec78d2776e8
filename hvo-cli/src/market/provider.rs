use chrono::NaiveDate;

use crate::{
    api::tankerkoenig,
    market::{MarketSnapshot, Provenance, fallback},
    prelude::*,
    quantity::currency::CentsPerLiter,
};

/// Produces the market snapshot, preferring the live diesel price.
pub struct Provider {
    tankerkoenig: Option<tankerkoenig::Api>,

    /// There is no HVO100 feed, so its price is the diesel price plus the markup.
    hvo100_markup: CentsPerLiter,
}

impl Provider {
    pub const fn new(tankerkoenig: Option<tankerkoenig::Api>, hvo100_markup: CentsPerLiter) -> Self {
        Self { tankerkoenig, hvo100_markup }
    }

    /// A client that could not be built counts as one more feed failure.
    pub fn with_client(tankerkoenig: Result<tankerkoenig::Api>, hvo100_markup: CentsPerLiter) -> Self {
        let tankerkoenig = tankerkoenig
            .inspect_err(|error| warn!("failed to build the Tankerkönig client: {error:#}"))
            .ok();
        Self::new(tankerkoenig, hvo100_markup)
    }

    /// Never fails: any trouble with the live feed falls back to the synthetic prices.
    #[instrument(skip_all, fields(on = %on))]
    pub async fn fetch(&self, on: NaiveDate) -> MarketSnapshot {
        let fallback = fallback::snapshot_on(on);
        let Some(diesel_price) = self.fetch_live_diesel_price().await else {
            info!("using the fallback prices");
            return fallback;
        };
        self.live_snapshot(diesel_price, fallback)
    }

    /// Quota price and BEHG rate have no live source and stay synthetic.
    fn live_snapshot(&self, diesel_price: CentsPerLiter, fallback: MarketSnapshot) -> MarketSnapshot {
        MarketSnapshot {
            diesel_price,
            hvo100_price: diesel_price + self.hvo100_markup,
            source: Some(Provenance::Live),
            ..fallback
        }
    }

    async fn fetch_live_diesel_price(&self) -> Option<CentsPerLiter> {
        let Some(api) = &self.tankerkoenig else {
            debug!("no Tankerkönig API key configured");
            return None;
        };
        match api.get_mean_diesel_price().await {
            Ok(Some(price)) => Some(price),
            Ok(None) => {
                warn!("no station reported a diesel price");
                None
            }
            Err(error) => {
                warn!("failed to fetch the diesel prices: {error:#}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use reqwest::Url;
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpListener,
    };

    use super::*;

    const MARKUP: CentsPerLiter = CentsPerLiter(12.0);

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 24).unwrap()
    }

    fn api(url: Url) -> Result<tankerkoenig::Api> {
        let area =
            tankerkoenig::Area::builder().latitude(51.195).longitude(6.442).radius_km(5.0).build();
        tankerkoenig::Api::new("invalid".to_string(), url, area)
    }

    /// Serve a single canned HTTP response on a random local port.
    async fn serve_once(status: &str, body: &str) -> Result<Url> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let url = Url::parse(&format!("http://{}/json/list.php", listener.local_addr()?))?;
        let response = format!(
            "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len(),
        );
        tokio::spawn(async move {
            let Ok((mut stream, _)) = listener.accept().await else {
                return;
            };
            let mut request = [0; 8192];
            let _ = stream.read(&mut request).await;
            let _ = stream.write_all(response.as_bytes()).await;
            let _ = stream.shutdown().await;
        });
        Ok(url)
    }

    #[tokio::test]
    async fn test_fetch_without_key_is_deterministic() {
        let provider = Provider::new(None, MARKUP);
        let first = provider.fetch(today()).await;
        let second = provider.fetch(today()).await;
        assert_eq!(first, second);
        assert_eq!(first.source, Some(Provenance::Fallback));
        assert_eq!(first.date, today());
    }

    #[test]
    fn test_live_snapshot() {
        let fallback = fallback::snapshot_on(today());
        let snapshot = Provider::new(None, MARKUP).live_snapshot(CentsPerLiter(167.0), fallback);
        assert_eq!(snapshot.diesel_price, CentsPerLiter(167.0));
        assert_eq!(snapshot.hvo100_price, CentsPerLiter(179.0));
        assert_eq!(snapshot.source, Some(Provenance::Live));
        assert_eq!(snapshot.quota_price, fallback.quota_price);
        assert_eq!(snapshot.behg_rate, fallback.behg_rate);
        assert_eq!(snapshot.date, today());
    }

    #[tokio::test]
    async fn test_fetch_falls_back_on_unreachable_feed() -> Result {
        let api = api(Url::parse("http://127.0.0.1:9/json/list.php")?)?;
        let snapshot = Provider::new(Some(api), MARKUP).fetch(today()).await;
        assert_eq!(snapshot, fallback::snapshot_on(today()));
        Ok(())
    }

    #[tokio::test]
    async fn test_fetch_falls_back_on_server_error() -> Result {
        let url = serve_once("500 Internal Server Error", "").await?;
        let snapshot = Provider::new(Some(api(url)?), MARKUP).fetch(today()).await;
        assert_eq!(snapshot.source, Some(Provenance::Fallback));
        assert_eq!(snapshot, fallback::snapshot_on(today()));
        Ok(())
    }

    #[tokio::test]
    async fn test_fetch_falls_back_on_malformed_body() -> Result {
        let url = serve_once("200 OK", "{oops").await?;
        let snapshot = Provider::new(Some(api(url)?), MARKUP).fetch(today()).await;
        assert_eq!(snapshot.source, Some(Provenance::Fallback));
        assert_eq!(snapshot, fallback::snapshot_on(today()));
        Ok(())
    }

    #[tokio::test]
    async fn test_fetch_falls_back_on_no_prices() -> Result {
        let url = serve_once("200 OK", r#"{"ok": true, "stations": [{"diesel": false}]}"#).await?;
        let snapshot = Provider::new(Some(api(url)?), MARKUP).fetch(today()).await;
        assert_eq!(snapshot.source, Some(Provenance::Fallback));
        Ok(())
    }

    #[tokio::test]
    async fn test_fetch_live_ok() -> Result {
        // language=json
        let body = r#"{"ok": true, "stations": [{"diesel": 1.659}, {"diesel": 1.689}]}"#;
        let url = serve_once("200 OK", body).await?;
        let snapshot = Provider::new(Some(api(url)?), MARKUP).fetch(today()).await;
        let fallback = fallback::snapshot_on(today());
        assert_eq!(snapshot.source, Some(Provenance::Live));
        assert_eq!(snapshot.diesel_price, CentsPerLiter(167.0));
        assert_eq!(snapshot.hvo100_price, CentsPerLiter(179.0));
        assert_eq!(snapshot.quota_price, fallback.quota_price);
        assert_eq!(snapshot.behg_rate, fallback.behg_rate);
        Ok(())
    }

    #[tokio::test]
    async fn test_with_client_falls_back_on_client_error() {
        let provider = Provider::with_client(Err(Error::msg("no TLS backend")), MARKUP);
        let snapshot = provider.fetch(today()).await;
        assert_eq!(snapshot, fallback::snapshot_on(today()));
    }
}
