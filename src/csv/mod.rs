use std::io::Read;

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use log::warn;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{
    domain::{
        error::Error as DataError,
        rates::{RateEntry, RateIndex},
        sale::SaleLine,
    },
    error::{Error, Result},
};

/// Column layout of App Store Connect financial reports (tab-delimited).
const SALES_COLUMN_START_DATE: usize = 0;
const SALES_COLUMN_QUANTITY: usize = 5;
const SALES_COLUMN_AMOUNT: usize = 7;
const SALES_COLUMN_CURRENCY: usize = 8;
const SALES_COLUMN_PRODUCT: usize = 12;
const SALES_COLUMN_COUNTRY: usize = 17;

const DATE_FORMAT: &str = "%m/%d/%Y";

/// Parse a locale-formatted decimal ("1.234,56") into an exact [`Decimal`].
///
/// Both input formats write numbers with a comma as the decimal separator
/// and an optional period as the thousands separator; this is the single
/// normalization point shared by the two readers.
pub fn parse_locale_decimal(raw: &str) -> Option<Decimal> {
    let normalized = raw.trim().replace('.', "").replace(',', ".");
    if normalized.is_empty() {
        return None;
    }
    normalized.parse().ok()
}

/// Parse [`SaleLine`]s from one sales report.
///
/// Header and summary rows are recognized by their first field not being a
/// date and are skipped, as are blank lines. A date-led row with a missing
/// or malformed field aborts the run: a broken data row means the export
/// itself is corrupted and silently dropping it would lose money.
pub fn read_sales(reader: impl Read, file: &str) -> Result<Vec<SaleLine>> {
    let mut rows = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut sales = Vec::new();
    for record in rows.records() {
        let record = record?;
        let line = record.position().map_or(0, |p| p.line());

        // data rows are the ones led by a mm/dd/yyyy date
        if !record
            .get(SALES_COLUMN_START_DATE)
            .is_some_and(|first| first.contains('/'))
        {
            continue;
        }

        sales.push(parse_sale_record(&record, file, line)?);
    }

    Ok(sales)
}

fn required_field<'r>(
    record: &'r StringRecord,
    column: usize,
    name: &str,
    file: &str,
    line: u64,
) -> Result<&'r str> {
    match record.get(column).map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(Error::ParseError {
            file: file.to_owned(),
            line,
            detail: format!("missing {name} (column {column})"),
        }),
    }
}

fn parse_sale_record(record: &StringRecord, file: &str, line: u64) -> Result<SaleLine> {
    let field = |column, name| required_field(record, column, name, file, line);

    let quantity = field(SALES_COLUMN_QUANTITY, "quantity")?;
    let quantity = quantity.parse().map_err(|_| Error::ParseError {
        file: file.to_owned(),
        line,
        detail: format!("invalid quantity \"{quantity}\""),
    })?;
    let amount = field(SALES_COLUMN_AMOUNT, "proceeds amount")?;
    let proceeds_amount = parse_locale_decimal(amount).ok_or_else(|| Error::ParseError {
        file: file.to_owned(),
        line,
        detail: format!("invalid proceeds amount \"{amount}\""),
    })?;

    Ok(SaleLine {
        country_code: field(SALES_COLUMN_COUNTRY, "country code")?.to_owned(),
        currency_code: field(SALES_COLUMN_CURRENCY, "currency code")?.to_owned(),
        product_name: field(SALES_COLUMN_PRODUCT, "product title")?.to_owned(),
        quantity,
        proceeds_amount,
        source_file: file.to_owned(),
        line_number: line,
    })
}

/// Comma-delimited rate-file row; the rate stays a string here because it
/// is locale-formatted and normalized by [`parse_locale_decimal`].
#[derive(Debug, Deserialize)]
struct RateRow {
    country_code: String,
    currency_code: String,
    exchange_rate: String,
    period_start: String,
    period_end: String,
}

/// Parse the exchange-rate file into a [`RateIndex`].
///
/// The file intermixes header and metadata rows with real entries, so rows
/// that are too short or have no numeric exchange rate are skipped with a
/// warning. Once the rate parses the row counts as data and the remaining
/// fields must be valid. A file yielding no entry at all aborts the run;
/// nothing can be converted without rates.
pub fn read_rates(reader: impl Read, file: &str) -> Result<RateIndex> {
    let mut rows = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut index: Option<RateIndex> = None;
    for record in rows.records() {
        let record = record?;
        let line = record.position().map_or(0, |p| p.line());
        let Ok(row) = record.deserialize::<RateRow>(None) else {
            warn!("{file}, line {line}: skipping non-data row");
            continue;
        };
        let Some(exchange_rate) = parse_locale_decimal(&row.exchange_rate) else {
            warn!(
                "{file}, line {line}: skipping row without a numeric exchange rate (\"{}\")",
                row.exchange_rate
            );
            continue;
        };
        if exchange_rate <= Decimal::ZERO {
            return Err(Error::ParseError {
                file: file.to_owned(),
                line,
                detail: format!("exchange rate must be positive, got \"{exchange_rate}\""),
            });
        }

        let entry = RateEntry {
            country_code: row.country_code.trim().to_owned(),
            currency_code: row.currency_code.trim().to_owned(),
            exchange_rate,
            period_start: parse_date(&row.period_start, file, line)?,
            period_end: parse_date(&row.period_end, file, line)?,
        };

        let index =
            index.get_or_insert_with(|| RateIndex::new(entry.period_start, entry.period_end));
        if index.contains(&entry.country_code, &entry.currency_code) {
            return Err(Error::DataError(DataError::DuplicateRate {
                country: entry.country_code,
                currency: entry.currency_code,
                file: file.to_owned(),
                line,
            }));
        }
        index.insert(entry);
    }

    index.ok_or_else(|| Error::ConfigurationError(format!("no exchange rates found in {file}")))
}

fn parse_date(raw: &str, file: &str, line: u64) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|_| Error::ParseError {
        file: file.to_owned(),
        line,
        detail: format!("invalid date \"{raw}\""),
    })
}
