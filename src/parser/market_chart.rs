// CoinGecko market_chart payload parsing
use crate::model::{MarketSeries, ParseError, Sample};
use serde_json::Value;

pub trait Parser {
    fn parse(&self, json: &str) -> Result<MarketSeries, ParseError>;
}

pub struct MarketChartParser;

impl MarketChartParser {
    pub fn new() -> Self {
        Self
    }

    /// Reads one `[[timestamp_ms, value], ...]` series out of the payload.
    /// Timestamps arrive as JSON numbers and are truncated to whole
    /// milliseconds.
    fn series(payload: &Value, field: &str) -> Result<Vec<Sample>, ParseError> {
        let rows = payload
            .get(field)
            .and_then(Value::as_array)
            .ok_or_else(|| ParseError::MissingField(field.to_string()))?;

        let mut samples = Vec::with_capacity(rows.len());
        for row in rows {
            let pair = row
                .as_array()
                .filter(|pair| pair.len() >= 2)
                .ok_or_else(|| {
                    ParseError::MalformedPayload(format!(
                        "expected [timestamp, value] pair in '{}'",
                        field
                    ))
                })?;
            let timestamp_ms = pair[0].as_f64().ok_or_else(|| {
                ParseError::MalformedPayload(format!("non-numeric timestamp in '{}'", field))
            })? as i64;
            let value = pair[1].as_f64().ok_or_else(|| {
                ParseError::MalformedPayload(format!("non-numeric value in '{}'", field))
            })?;
            samples.push(Sample { timestamp_ms, value });
        }

        Ok(samples)
    }
}

impl Parser for MarketChartParser {
    fn parse(&self, json: &str) -> Result<MarketSeries, ParseError> {
        let payload: Value =
            serde_json::from_str(json).map_err(|e| ParseError::MalformedPayload(e.to_string()))?;

        let prices = Self::series(&payload, "prices")?;
        let volumes = Self::series(&payload, "total_volumes")?;

        Ok(MarketSeries { prices, volumes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_prices_and_volumes() {
        let json = r#"{
            "prices": [[1614585600000, 43112.5], [1614589200000, 43250.0]],
            "market_caps": [[1614585600000, 800000000.0]],
            "total_volumes": [[1614585600000, 51234.75]]
        }"#;

        let series = MarketChartParser::new().parse(json).unwrap();
        assert_eq!(series.prices.len(), 2);
        assert_eq!(series.prices[0].timestamp_ms, 1614585600000);
        assert_eq!(series.prices[0].value, 43112.5);
        assert_eq!(series.volumes.len(), 1);
        assert_eq!(series.volumes[0].value, 51234.75);
    }

    #[test]
    fn fractional_timestamps_truncate_to_milliseconds() {
        let json = r#"{
            "prices": [[1614585600123.75, 1.0]],
            "total_volumes": [[1614585600123.75, 2.0]]
        }"#;

        let series = MarketChartParser::new().parse(json).unwrap();
        assert_eq!(series.prices[0].timestamp_ms, 1614585600123);
    }

    #[test]
    fn empty_series_parse_as_empty() {
        let json = r#"{"prices": [], "total_volumes": []}"#;

        let series = MarketChartParser::new().parse(json).unwrap();
        assert!(series.prices.is_empty());
        assert!(series.volumes.is_empty());
    }

    #[test]
    fn missing_volume_key_is_reported() {
        let json = r#"{"prices": [[1614585600000, 1.0]]}"#;

        let err = MarketChartParser::new().parse(json).unwrap_err();
        assert!(matches!(err, ParseError::MissingField(field) if field == "total_volumes"));
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = MarketChartParser::new().parse("not json").unwrap_err();
        assert!(matches!(err, ParseError::MalformedPayload(_)));
    }

    #[test]
    fn scalar_row_is_reported() {
        let json = r#"{"prices": [42], "total_volumes": []}"#;

        let err = MarketChartParser::new().parse(json).unwrap_err();
        assert!(matches!(err, ParseError::MalformedPayload(_)));
    }
}
