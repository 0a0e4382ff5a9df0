pub mod telegram;

pub use telegram::TelegramNotifier;

use crate::model::TrendReport;

/// Renders the user-facing result text for one analyzed coin.
///
/// A bad trend suppresses the buy/sell lines: there is no day worth
/// trading in a range that only ever declines.
pub fn render_report(coin_id: &str, vs_currency: &str, report: &TrendReport) -> String {
    let currency = vs_currency.to_uppercase();
    let mut text = format!("📊 Trend report for {}\n\n", coin_id);

    text.push_str(&format!(
        "Longest downward trend: {} days.\n\n",
        report.longest_downward_streak_days
    ));
    text.push_str(&format!(
        "Highest trading volume: {:.2} {} on {}\n\n",
        report.peak_volume_amount, currency, report.peak_volume_day
    ));

    if report.all_days_bad_trend {
        text.push_str("No good days to buy or sell.");
    } else {
        text.push_str(&format!("Best day to buy: {}\n", report.best_buy_day));
        text.push_str(&format!("Best day to sell: {}", report.best_sell_day));
    }

    text
}
