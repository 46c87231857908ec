use std::fs;

use anyhow::{Context, Result};
use csv::WriterBuilder;

const FIRST_YEAR: i32 = 1977;
const LAST_YEAR: i32 = 2025;
/// Months with data in the final (partial) year.
const LAST_YEAR_MONTHS: u32 = 8;

const PRESIDENTS: &str = "\
# name,party,start_year,start_month,end_year,end_month
# Synthetic sample; figures in BLS_private.csv are generated, not real.
Carter,D,1977,1,1981,1
Reagan,R,1981,1,1989,1
Bush Sr,R,1989,1,1993,1
Clinton,D,1993,1,2001,1
Bush Jr,R,2001,1,2009,1
Obama,D,2009,1,2017,1
Trump,R,2017,1,2021,1
Biden,D,2021,1,2025,1
";

/// Private employment in thousands: steady growth, a seasonal swing and a
/// dip every ten years.
fn employment(year: i32, month: u32) -> f64 {
    let t = f64::from((year - FIRST_YEAR) * 12) + f64::from(month - 1);
    let trend = 64_000.0 * 1.0013_f64.powf(t);
    let seasonal = 250.0 * (2.0 * std::f64::consts::PI * f64::from(month) / 12.0).sin();
    let dip = if (year - FIRST_YEAR) % 10 == 4 { -2_500.0 } else { 0.0 };
    (trend + seasonal + dip).round()
}

fn main() -> Result<()> {
    let series_path = "BLS_private.csv";
    let terms_path = "presidents.txt";

    let mut writer = WriterBuilder::new()
        .flexible(true)
        .from_path(series_path)
        .with_context(|| format!("creating {series_path}"))?;

    writer.write_record(["Employment, Hours, and Earnings (synthetic sample)"])?;
    writer.write_record(["Series Id:", "CES0500000001"])?;
    writer.write_record(["Seasonally Adjusted"])?;
    writer.write_record(["Years:", format!("{FIRST_YEAR} to {LAST_YEAR}").as_str()])?;
    writer.write_record([
        "Year", "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov",
        "Dec",
    ])?;

    let mut rows = 0;
    for year in FIRST_YEAR..=LAST_YEAR {
        let available = if year == LAST_YEAR { LAST_YEAR_MONTHS } else { 12 };
        let mut row = vec![year.to_string()];
        row.extend((1..=12).map(|month| {
            if month <= available {
                format!("{:.0}", employment(year, month))
            } else {
                String::new()
            }
        }));
        writer.write_record(&row)?;
        rows += 1;
    }
    writer.flush().with_context(|| format!("writing {series_path}"))?;

    fs::write(terms_path, PRESIDENTS).with_context(|| format!("writing {terms_path}"))?;

    println!("Wrote {rows} years of monthly figures to {series_path} and terms to {terms_path}");
    Ok(())
}
