use crate::fetcher::traits::MarketFetcher;
use crate::model::{FetchError, RangeRequest};
use crate::utils::utc_midnight_secs;

use reqwest::Client;
use std::time::Duration;

const HOUR_IN_SECONDS: i64 = 3600;

pub struct CoinGeckoFetcher {
    client: Client,
}

impl CoinGeckoFetcher {
    pub fn new() -> Self {
        let client = Client::builder()
            .user_agent("CoinSniperBot/0.1")
            .timeout(Duration::from_secs(30))
            .build()
            .expect("❗ Failed to create HTTP client");

        Self { client }
    }

    /// Range endpoint expects unix seconds; the end is padded by one hour
    /// past its midnight so the last day's first sample is included.
    fn build_url(&self, req: &RangeRequest) -> String {
        let from = utc_midnight_secs(req.start);
        let to = utc_midnight_secs(req.end) + HOUR_IN_SECONDS;
        format!(
            "https://api.coingecko.com/api/v3/coins/{}/market_chart/range?vs_currency={}&from={}&to={}",
            req.coin_id, req.vs_currency, from, to
        )
    }
}

#[async_trait::async_trait]
impl MarketFetcher for CoinGeckoFetcher {
    async fn fetch(&self, req: &RangeRequest) -> Result<String, FetchError> {
        if req.start > req.end {
            return Err(FetchError::InvalidDateRange);
        }

        let url = self.build_url(req);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    FetchError::Timeout
                } else {
                    FetchError::Http(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            return Err(FetchError::BadStatus(response.status().as_u16()));
        }

        response.text().await.map_err(|e| FetchError::Http(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn request(start: &str, end: &str) -> RangeRequest {
        RangeRequest {
            coin_id: "bitcoin".to_string(),
            vs_currency: "eur".to_string(),
            start: start.parse::<NaiveDate>().unwrap(),
            end: end.parse::<NaiveDate>().unwrap(),
        }
    }

    #[test]
    fn url_covers_range_in_unix_seconds_with_end_padding() {
        let fetcher = CoinGeckoFetcher::new();
        let url = fetcher.build_url(&request("2020-01-01", "2020-01-05"));

        // 2020-01-01 00:00 UTC = 1577836800, 2020-01-05 00:00 UTC + 1h = 1578186000
        assert_eq!(
            url,
            "https://api.coingecko.com/api/v3/coins/bitcoin/market_chart/range\
             ?vs_currency=eur&from=1577836800&to=1578186000"
        );
    }

    #[tokio::test]
    async fn inverted_range_is_rejected_before_any_request() {
        let fetcher = CoinGeckoFetcher::new();
        let err = fetcher.fetch(&request("2020-01-05", "2020-01-01")).await.unwrap_err();
        assert!(matches!(err, FetchError::InvalidDateRange));
    }
}
