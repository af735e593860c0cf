use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use super::{
    error::{Error, Result},
    rates::RateIndex,
    sale::SaleLine,
    subsidiary::{self, Subsidiary},
};

/// Output configuration for a single run.
#[derive(Debug, Clone)]
pub struct Config {
    /// ISO code of the currency all native amounts are converted into.
    pub home_currency: String,
    /// Fractional digits of per-line converted amounts.
    pub precision_detail: u32,
    /// Fractional digits of subtotals and totals.
    pub precision_total: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            home_currency: "EUR".to_owned(),
            precision_detail: 4,
            precision_total: 2,
        }
    }
}

/// Round half away from zero, the one rounding rule used everywhere.
pub fn round(value: Decimal, precision: u32) -> Decimal {
    value.round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero)
}

/// One sale line joined with its exchange rate.
///
/// `home_amount` is rounded to the detail precision. It is informative
/// only: subtotals convert the exact native sum instead of summing these
/// rounded values, so the per-line amounts need not add up to the
/// displayed subtotal.
#[derive(Debug)]
pub struct ConvertedLine {
    pub sale: SaleLine,
    pub exchange_rate: Decimal,
    pub home_amount: Decimal,
}

/// Exact native subtotal of one currency within a country group.
#[derive(Debug)]
pub struct CurrencySubtotal {
    pub currency_code: String,
    pub exchange_rate: Decimal,
    pub native_total: Decimal,
}

impl CurrencySubtotal {
    /// Unrounded home-currency equivalent of the native subtotal.
    pub fn home_total(&self) -> Decimal {
        self.native_total * self.exchange_rate
    }
}

/// All sales of one country, in input order, with per-currency subtotals
/// in first-seen currency order.
#[derive(Debug)]
pub struct CountryGroup {
    pub country_code: String,
    pub country_name: &'static str,
    pub lines: Vec<ConvertedLine>,
    pub native_subtotals: Vec<CurrencySubtotal>,
}

impl CountryGroup {
    pub fn subtotal_home(&self) -> Decimal {
        self.native_subtotals.iter().map(|s| s.home_total()).sum()
    }
}

/// All sales one subsidiary is accountable for, grouped by country in
/// first-seen order.
#[derive(Debug)]
pub struct SubsidiaryReport {
    pub subsidiary: &'static Subsidiary,
    pub groups: Vec<CountryGroup>,
}

impl SubsidiaryReport {
    pub fn total_home(&self) -> Decimal {
        self.groups.iter().map(|g| g.subtotal_home()).sum()
    }
}

/// The fully aggregated run: one report per subsidiary in first-seen
/// order, plus the reporting period taken from the rate file.
#[derive(Debug)]
pub struct Report {
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub subsidiaries: Vec<SubsidiaryReport>,
}

impl Report {
    /// Join the sales with the rate index and the jurisdiction table.
    ///
    /// Fails fast on the first sale whose country is not in the table or
    /// whose (country, currency) pair has no rate; a miss means the table
    /// or the rate file needs fixing, so no partial result is produced.
    pub fn build(sales: Vec<SaleLine>, rates: &RateIndex, config: &Config) -> Result<Self> {
        let (period_start, period_end) = rates.period();
        let mut subsidiaries: Vec<SubsidiaryReport> = Vec::new();

        for sale in sales {
            let subsidiary = subsidiary::subsidiary_for(&sale.country_code).ok_or_else(|| {
                Error::UnknownCountry {
                    country: sale.country_code.clone(),
                    file: sale.source_file.clone(),
                    line: sale.line_number,
                }
            })?;
            let country_name = subsidiary::country_name(&sale.country_code).ok_or_else(|| {
                Error::UnknownCountry {
                    country: sale.country_code.clone(),
                    file: sale.source_file.clone(),
                    line: sale.line_number,
                }
            })?;
            let rate = rates
                .get(&sale.country_code, &sale.currency_code)
                .ok_or_else(|| Error::MissingRate {
                    country: sale.country_code.clone(),
                    currency: sale.currency_code.clone(),
                    file: sale.source_file.clone(),
                    line: sale.line_number,
                })?
                .exchange_rate;

            let index = match subsidiaries
                .iter()
                .position(|s| s.subsidiary.code == subsidiary.code)
            {
                Some(index) => index,
                None => {
                    subsidiaries.push(SubsidiaryReport {
                        subsidiary,
                        groups: Vec::new(),
                    });
                    subsidiaries.len() - 1
                }
            };
            let report = &mut subsidiaries[index];

            let index = match report
                .groups
                .iter()
                .position(|g| g.country_code == sale.country_code)
            {
                Some(index) => index,
                None => {
                    report.groups.push(CountryGroup {
                        country_code: sale.country_code.clone(),
                        country_name,
                        lines: Vec::new(),
                        native_subtotals: Vec::new(),
                    });
                    report.groups.len() - 1
                }
            };
            let group = &mut report.groups[index];

            match group
                .native_subtotals
                .iter_mut()
                .find(|s| s.currency_code == sale.currency_code)
            {
                Some(subtotal) => subtotal.native_total += sale.proceeds_amount,
                None => group.native_subtotals.push(CurrencySubtotal {
                    currency_code: sale.currency_code.clone(),
                    exchange_rate: rate,
                    native_total: sale.proceeds_amount,
                }),
            }

            let home_amount = round(sale.proceeds_amount * rate, config.precision_detail);
            group.lines.push(ConvertedLine {
                sale,
                exchange_rate: rate,
                home_amount,
            });
        }

        Ok(Report {
            period_start,
            period_end,
            subsidiaries,
        })
    }

    /// Exact sum of the totals of all EU-member subsidiaries; feeds the
    /// Recapitulative Statement.
    pub fn eu_total(&self) -> Decimal {
        self.subsidiaries
            .iter()
            .filter(|s| s.subsidiary.is_eu_member)
            .map(|s| s.total_home())
            .sum()
    }
}
