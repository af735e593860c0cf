use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Exchange rate for sales made in one country and settled in one currency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateEntry {
    pub country_code: String,
    pub currency_code: String,
    pub exchange_rate: Decimal,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
}

/// All exchange rates of one reporting period, keyed by country and currency.
///
/// The key is composite on purpose: the same currency can be listed with
/// different rates for different countries (Apple settles USD sales in the
/// Americas and in the rest of the world at different rates, for example).
/// Uniqueness of the key is enforced by the rate-file reader, which is the
/// only place with enough context to report the offending file and line.
#[derive(Debug)]
pub struct RateIndex {
    entries: HashMap<(String, String), RateEntry>,
    period_start: NaiveDate,
    period_end: NaiveDate,
}

impl RateIndex {
    /// Create an empty index for the reporting period of the first parsed
    /// rate row; all reports of one run share that period.
    pub fn new(period_start: NaiveDate, period_end: NaiveDate) -> Self {
        RateIndex {
            entries: HashMap::new(),
            period_start,
            period_end,
        }
    }

    pub fn contains(&self, country_code: &str, currency_code: &str) -> bool {
        self.get(country_code, currency_code).is_some()
    }

    pub fn insert(&mut self, entry: RateEntry) {
        let key = (entry.country_code.clone(), entry.currency_code.clone());
        self.entries.insert(key, entry);
    }

    pub fn get(&self, country_code: &str, currency_code: &str) -> Option<&RateEntry> {
        self.entries
            .get(&(country_code.to_owned(), currency_code.to_owned()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Start and end of the sales date range covered by this run's reports.
    pub fn period(&self) -> (NaiveDate, NaiveDate) {
        (self.period_start, self.period_end)
    }
}
