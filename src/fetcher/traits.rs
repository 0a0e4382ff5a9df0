use crate::model::{FetchError, RangeRequest};

#[async_trait::async_trait]
pub trait MarketFetcher: Send + Sync {
    async fn fetch(&self, req: &RangeRequest) -> Result<String, FetchError>;
}
