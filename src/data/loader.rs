use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, info, warn};
use serde::Deserialize;

use super::model::{MonthKey, Party, Term, TermRegistry, TimeSeriesStore};
use crate::error::LoadError;

/// First cell of the row that introduces the monthly table.
const HEADER_TOKEN: &str = "Year";

/// name, party, start_year, start_month, end_year, end_month
const TERM_FIELDS: usize = 6;

fn reader_builder() -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder.has_headers(false).flexible(true).trim(Trim::All);
    builder
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map_or(0, |p| p.line())
}

// ---------------------------------------------------------------------------
// BLS monthly table
// ---------------------------------------------------------------------------

/// Load a BLS export laid out as `Year, Jan, ..., Dec`.
///
/// Everything up to and including the `Year` header row is skipped, as are
/// rows whose first cell is not a plain integer (footnotes, blank rows).
/// Empty month cells are missing observations; a non-numeric month cell
/// is an error.
pub fn load_time_series(path: &Path) -> Result<TimeSeriesStore, LoadError> {
    let file = std::fs::File::open(path).map_err(csv::Error::from)?;
    let store = read_time_series(file)?;
    info!("loaded {} monthly figures from {}", store.len(), path.display());
    Ok(store)
}

pub fn read_time_series<R: Read>(rdr: R) -> Result<TimeSeriesStore, LoadError> {
    let mut reader = reader_builder().from_reader(rdr);

    let mut entries = Vec::new();
    let mut header_found = false;

    for result in reader.records() {
        let record = result?;
        let first = record.get(0).unwrap_or("");

        if !header_found {
            header_found = first == HEADER_TOKEN;
            continue;
        }

        if !is_year_cell(first) {
            continue;
        }
        let year = first.parse::<i32>().map_err(|_| LoadError::InvalidYear {
            line: line_of(&record),
            value: first.to_string(),
        })?;

        for month in 1..=12u32 {
            // Short rows (partial current year) just lack the trailing months.
            let cell = record.get(month as usize).unwrap_or("");
            if cell.is_empty() {
                continue;
            }
            let figure = cell.parse::<f64>().map_err(|_| LoadError::InvalidFigure {
                line: line_of(&record),
                year,
                month,
                value: cell.to_string(),
            })?;
            entries.push((MonthKey::new(year, month), figure));
        }
    }

    if !header_found {
        warn!("no \"{HEADER_TOKEN}\" header row found; employment series is empty");
    }
    debug!("parsed {} monthly observations", entries.len());

    Ok(TimeSeriesStore::from_entries(entries))
}

fn is_year_cell(cell: &str) -> bool {
    !cell.is_empty() && cell.bytes().all(|b| b.is_ascii_digit())
}

// ---------------------------------------------------------------------------
// Presidential terms
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct TermRow {
    name: String,
    party: String,
    start_year: i32,
    start_month: u32,
    end_year: i32,
    end_month: u32,
}

impl From<TermRow> for Term {
    fn from(row: TermRow) -> Self {
        Term {
            name: row.name,
            party: Party::from_label(&row.party),
            start: MonthKey::new(row.start_year, row.start_month),
            end: MonthKey::new(row.end_year, row.end_month),
        }
    }
}

/// Load the term list: one `name,party,start_year,start_month,end_year,end_month`
/// per line. `#` comments and blank lines are ignored; lines with the wrong
/// number of fields are skipped with a warning.
pub fn load_terms(path: &Path) -> Result<TermRegistry, LoadError> {
    let file = std::fs::File::open(path).map_err(csv::Error::from)?;
    let registry = read_terms(file)?;
    info!("loaded {} terms from {}", registry.len(), path.display());
    Ok(registry)
}

pub fn read_terms<R: Read>(rdr: R) -> Result<TermRegistry, LoadError> {
    // Plain comma splitting: a stray quote must not swallow the following lines.
    let mut reader = reader_builder()
        .comment(Some(b'#'))
        .quoting(false)
        .from_reader(rdr);

    let mut terms = Vec::new();

    for result in reader.records() {
        let record = result?;
        if is_blank_or_comment(&record) {
            continue;
        }

        let line = line_of(&record);
        let text = record.iter().collect::<Vec<_>>().join(",");

        if record.len() != TERM_FIELDS {
            warn!("Skipping malformed line {line}: {text}");
            continue;
        }

        let row: TermRow = record
            .deserialize(None)
            .map_err(|source| LoadError::InvalidTerm {
                line,
                record: text,
                source,
            })?;
        terms.push(Term::from(row));
    }

    Ok(TermRegistry::new(terms))
}

// Indented comments and whitespace-only lines get past the csv reader.
fn is_blank_or_comment(record: &StringRecord) -> bool {
    match record.get(0) {
        Some(first) if first.starts_with('#') => true,
        Some(first) => record.len() == 1 && first.is_empty(),
        None => true,
    }
}
