use crate::analyzer::day_bucket::{bucket_by_day, utc_date};
use crate::model::{AnalyzeError, DaySample, Sample, TrendReport};
use chrono::NaiveDate;

/// Trait defining the interface for a market trend analyzer.
pub trait Analyzer {
    fn analyze(&self, prices: &[Sample], volumes: &[Sample]) -> Result<TrendReport, AnalyzeError>;
}

/// Implementation of the trend analyzer.
pub struct TrendAnalyzer;

impl TrendAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Longest run of consecutive days each priced strictly below the day before.
    ///
    /// The running previous price starts at zero, so the first day of the
    /// range never opens a streak; streaks are measured from the second day
    /// onward.
    fn longest_downward_streak(days: &[DaySample]) -> u32 {
        let mut record = 0u32;
        let mut streak = 0u32;
        let mut previous_price = 0.0;

        for day in days {
            if day.sample.value < previous_price {
                streak += 1;
                if streak >= record {
                    record = streak;
                }
            } else {
                streak = 0;
            }
            previous_price = day.sample.value;
        }

        record
    }

    /// Raw sample with the highest traded volume; ties keep the earliest.
    /// Runs over the full intraday series, not the day buckets.
    fn peak_volume(volumes: &[Sample]) -> Result<(NaiveDate, f64), AnalyzeError> {
        let mut peak = volumes.first().ok_or(AnalyzeError::EmptySeries("volume"))?;

        for sample in volumes {
            if sample.value > peak.value {
                peak = sample;
            }
        }

        Ok((utc_date(peak.timestamp_ms), peak.value))
    }

    /// Cheapest and priciest day of the range, plus whether every day after
    /// the first was a decrease from its predecessor.
    ///
    /// The running extrema start at zero: the first bucket always takes over
    /// both, and a lowest price sitting at exactly zero forces the next
    /// bucket to take over the buy side again.
    fn best_buy_and_sell(days: &[DaySample]) -> Result<(NaiveDate, NaiveDate, bool), AnalyzeError> {
        let first = days.first().ok_or(AnalyzeError::EmptySeries("price"))?;
        let mut highest_price = 0.0;
        let mut lowest_price = 0.0;
        let mut previous_price = 0.0;
        let mut downward_days = 0usize;
        let mut best_buy_day = first.date;
        let mut best_sell_day = first.date;

        for day in days {
            let price = day.sample.value;
            if price > highest_price {
                best_sell_day = day.date;
                highest_price = price;
            }
            if price < lowest_price || lowest_price == 0.0 {
                best_buy_day = day.date;
                lowest_price = price;
            }
            if price < previous_price {
                downward_days += 1;
            }
            previous_price = price;
        }

        let all_days_bad_trend = downward_days == days.len() - 1;
        Ok((best_buy_day, best_sell_day, all_days_bad_trend))
    }
}

impl Analyzer for TrendAnalyzer {
    /// Runs the full analysis over one price and one volume series.
    ///
    /// Both series must be non-empty and ascending by timestamp; emptiness
    /// is rejected up front, sortedness is assumed. Streaks and extrema are
    /// computed over day buckets, peak volume over the raw samples.
    fn analyze(&self, prices: &[Sample], volumes: &[Sample]) -> Result<TrendReport, AnalyzeError> {
        if prices.is_empty() {
            return Err(AnalyzeError::EmptySeries("price"));
        }

        let (peak_volume_day, peak_volume_amount) = Self::peak_volume(volumes)?;

        let days = bucket_by_day(prices);
        let longest_downward_streak_days = Self::longest_downward_streak(&days);
        let (best_buy_day, best_sell_day, all_days_bad_trend) = Self::best_buy_and_sell(&days)?;

        Ok(TrendReport {
            longest_downward_streak_days,
            peak_volume_day,
            peak_volume_amount,
            best_buy_day,
            best_sell_day,
            all_days_bad_trend,
        })
    }
}
