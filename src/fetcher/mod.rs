pub mod client;
pub mod traits;

pub use client::CoinGeckoFetcher;
pub use traits::MarketFetcher;
