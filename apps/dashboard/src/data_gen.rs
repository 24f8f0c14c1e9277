use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use rand::seq::SliceRandom;
use rand::Rng;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tradedesk_shared_models::{Side, Trade};

pub const SYMBOLS: [&str; 7] = ["AAPL", "GOOG", "MSFT", "AMZN", "TSLA", "NVDA", "META"];

pub const CSV_HEADER: &str = "Timestamp,Symbol,Side,Quantity,Price";

fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).expect("Valid start date")
}

/// Generates demo trades: `days` calendar days from 2024-01-01, weekends
/// skipped, `trades_per_day` trades per weekday with timestamps inside the
/// 09:30-16:00 session.
pub fn generate_trades(rng: &mut impl Rng, days: u32, trades_per_day: u32) -> Vec<Trade> {
    let session_open = NaiveTime::from_hms_opt(9, 30, 0).expect("Valid session open");
    let session_close = NaiveTime::from_hms_opt(16, 0, 0).expect("Valid session close");
    let session_minutes = (session_close - session_open).num_minutes();

    let mut trades = Vec::new();
    for offset in 0..days {
        let day = start_date() + Duration::days(offset as i64);
        if matches!(day.weekday(), Weekday::Sat | Weekday::Sun) {
            continue;
        }

        for _ in 0..trades_per_day {
            let minute = rng.gen_range(0..=session_minutes);
            let timestamp = NaiveDateTime::new(day, session_open + Duration::minutes(minute));
            let symbol = SYMBOLS.choose(rng).expect("Non-empty symbol list");
            let side = if rng.gen_bool(0.5) { Side::Buy } else { Side::Sell };
            let quantity = rng.gen_range(10..=1000);
            let price = (rng.gen_range(50.0..500.0_f64) * 100.0).round() / 100.0;

            trades.push(Trade {
                timestamp,
                symbol: symbol.to_string(),
                side,
                quantity,
                price,
            });
        }
    }

    trades
}

pub fn write_csv(trades: &[Trade], path: &Path) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);

    writeln!(writer, "{CSV_HEADER}")?;
    for trade in trades {
        writeln!(
            writer,
            "{},{},{},{},{:.2}",
            trade.timestamp.format("%Y-%m-%d %H:%M:%S"),
            trade.symbol,
            trade.side.as_str(),
            trade.quantity,
            trade.price
        )?;
    }

    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn weekends_are_skipped() {
        let mut rng = StdRng::seed_from_u64(7);

        // 2024-01-01 is a Monday; the first seven days hold five weekdays
        let trades = generate_trades(&mut rng, 7, 10);

        assert_eq!(trades.len(), 5 * 10);
        assert!(trades
            .iter()
            .all(|t| !matches!(t.timestamp.weekday(), Weekday::Sat | Weekday::Sun)));
    }

    #[test]
    fn values_stay_in_their_ranges() {
        let mut rng = StdRng::seed_from_u64(99);

        let trades = generate_trades(&mut rng, 5, 50);

        for trade in &trades {
            assert!((10..=1000).contains(&trade.quantity));
            assert!(trade.price >= 50.0 && trade.price < 500.005);
            assert!(SYMBOLS.contains(&trade.symbol.as_str()));

            let minutes = trade.timestamp.hour() * 60 + trade.timestamp.minute();
            assert!((9 * 60 + 30..=16 * 60).contains(&minutes));
        }
    }

    #[test]
    fn csv_starts_with_the_expected_header() {
        let mut rng = StdRng::seed_from_u64(3);
        let trades = generate_trades(&mut rng, 1, 2);
        let path = std::env::temp_dir().join("tradedesk_generated.csv");

        write_csv(&trades, &path).expect("Failed to write CSV");

        let content = std::fs::read_to_string(&path).expect("Failed to read CSV back");
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some(CSV_HEADER));
        assert_eq!(lines.count(), trades.len());
    }
}
