//! Plain-text rendering of panels for the log output.
use mock_common::timestamp;
use mock_generator::Panel;

/// One heading line followed by one line per record.
pub fn lines(panel: &Panel) -> Vec<String> {
    let heading = panel.domain().to_string().to_uppercase();
    let mut out = vec![format!("{} ({} records)", heading, panel.len())];
    match panel {
        Panel::Stocks(quotes) => out.extend(quotes.iter().map(|q| {
            format!(
                "  {:<5} Price={:>8.2} Change={:>+6.2}% Volume={} Cap={} Time={}",
                q.symbol.to_string(),
                q.price,
                q.percent_change,
                q.volume,
                q.market_cap,
                timestamp::format(&q.updated_at)
            )
        })),
        Panel::Weather(readings) => out.extend(readings.iter().map(|r| {
            format!(
                "  {:<8} {:>2}°C {:<13} Humidity={}% Wind={} km/h",
                r.location.to_string(),
                r.temperature_c,
                r.condition.to_string(),
                r.humidity_pct,
                r.wind_kph
            )
        })),
        Panel::News(items) => out.extend(items.iter().map(|n| {
            format!(
                "  [{}] {} - {} ({})",
                n.id,
                n.title,
                n.source,
                timestamp::format(&n.published_at)
            )
        })),
        Panel::Crypto(quotes) => out.extend(quotes.iter().map(|c| {
            format!(
                "  {:<4} {:<9} Price={:>9.2} 24h={:>+6.2}% Vol={}B Cap={}B",
                c.symbol.to_string(),
                c.name,
                c.price,
                c.change24h_pct,
                c.volume24h,
                c.market_cap
            )
        })),
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use mock_common::StockQuote;
    use mock_common::pools::StockSymbol;

    #[test]
    fn stock_line_layout() {
        let panel = Panel::Stocks(vec![StockQuote {
            symbol: StockSymbol::META,
            price: 321.5,
            percent_change: 1.25,
            volume: 1_500_000,
            market_cap: "9000.00".to_string(),
            updated_at: Utc.with_ymd_and_hms(2024, 2, 3, 4, 5, 6).unwrap(),
        }]);
        let lines = lines(&panel);
        assert_eq!(lines[0], "STOCKS (1 records)");
        assert_eq!(
            lines[1],
            "  META  Price=  321.50 Change= +1.25% Volume=1500000 Cap=9000.00 Time=2024-02-03 04:05:06"
        );
    }

    #[test]
    fn empty_panel_has_only_heading() {
        assert_eq!(lines(&Panel::News(Vec::new())), vec!["NEWS (0 records)"]);
    }
}
