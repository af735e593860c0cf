use std::fmt::{self, Display, Formatter};

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::report::{self, Config, Report};

/// Which amount columns to print, driven by the subtotal CLI flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Detail {
    /// Per-line conversion columns and per-country subtotal lines.
    #[default]
    Full,
    /// Omit the per-country subtotal lines.
    NoSubtotals,
    /// Only subtotals; per-line rows keep just quantity, product and the
    /// native amount.
    OnlySubtotals,
}

/// Render the aggregated report as the final text output.
pub fn render(report: &Report, config: &Config, detail: Detail) -> String {
    RenderedReport {
        report,
        config,
        detail,
    }
    .to_string()
}

struct RenderedReport<'a> {
    report: &'a Report,
    config: &'a Config,
    detail: Detail,
}

impl Display for RenderedReport<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let config = self.config;
        let symbol = home_symbol(&config.home_currency);
        writeln!(
            f,
            "Sales date: {} – {}",
            format_date(self.report.period_start),
            format_date(self.report.period_end)
        )?;

        // the EU total belongs right after the last EU-member subsidiary
        let last_eu_member = self
            .report
            .subsidiaries
            .iter()
            .rposition(|s| s.subsidiary.is_eu_member);
        let eu_members = self
            .report
            .subsidiaries
            .iter()
            .filter(|s| s.subsidiary.is_eu_member)
            .count();

        for (index, subsidiary_report) in self.report.subsidiaries.iter().enumerate() {
            let subsidiary = subsidiary_report.subsidiary;
            writeln!(f)?;
            writeln!(f)?;
            writeln!(f, "{}", subsidiary.name)?;
            for address_line in subsidiary.address_lines {
                writeln!(f, "{address_line}")?;
            }
            if let Some(vat_id) = subsidiary.vat_id {
                writeln!(f, "VAT ID: {vat_id}")?;
            }

            for group in &subsidiary_report.groups {
                writeln!(f)?;
                writeln!(f, "Sales in {} ({})", group.country_name, group.country_code)?;
                writeln!(
                    f,
                    "\tQuantity\tProduct\tAmount\tExchange Rate\tAmount in {}",
                    config.home_currency
                )?;

                for line in &group.lines {
                    write!(
                        f,
                        "\t{}\t{}\t{} {}",
                        line.sale.quantity,
                        line.sale.product_name,
                        line.sale.currency_code,
                        format_amount(line.sale.proceeds_amount, config.precision_total)
                    )?;
                    if self.detail != Detail::OnlySubtotals {
                        write!(
                            f,
                            "\t{}\t{} {symbol}",
                            format_amount(line.exchange_rate, 5),
                            format_amount(line.home_amount, config.precision_detail)
                        )?;
                    }
                    writeln!(f)?;
                }

                if self.detail != Detail::NoSubtotals {
                    for subtotal in &group.native_subtotals {
                        writeln!(f)?;
                        writeln!(
                            f,
                            "\t\tSubtotal {}:\t{} {}\t{}\t{} {symbol}",
                            group.country_code,
                            subtotal.currency_code,
                            format_amount(subtotal.native_total, config.precision_total),
                            format_amount(subtotal.exchange_rate, 5),
                            format_amount(subtotal.home_total(), config.precision_total)
                        )?;
                    }
                }
            }

            writeln!(f)?;
            writeln!(
                f,
                "{} Total:\t{} {symbol}",
                subsidiary.code,
                format_amount(subsidiary_report.total_home(), config.precision_total)
            )?;

            // With a single EU-member subsidiary whose handle is "EU" the
            // total line just written is already the EU total; a separate
            // line would be a byte-identical repeat.
            if last_eu_member == Some(index) && (eu_members > 1 || subsidiary.code != "EU") {
                writeln!(f)?;
                writeln!(
                    f,
                    "EU Total:\t{} {symbol}",
                    format_amount(self.report.eu_total(), config.precision_total)
                )?;
            }
        }

        Ok(())
    }
}

/// Symbol used next to converted amounts; only the euro gets one.
fn home_symbol(home_currency: &str) -> &str {
    if home_currency == "EUR" {
        "€"
    } else {
        home_currency
    }
}

fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Format an amount with a comma as decimal separator and periods as
/// thousands separators, rounded to the given number of fractional digits.
pub fn format_amount(value: Decimal, precision: u32) -> String {
    let rounded = report::round(value, precision);
    let text = format!("{:.*}", precision as usize, rounded.abs());
    let (integer, fraction) = match text.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (text.as_str(), None),
    };

    let mut output = String::with_capacity(text.len() + 4);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        output.push('-');
    }
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            output.push('.');
        }
        output.push(digit);
    }
    if let Some(fraction) = fraction {
        output.push(',');
        output.push_str(fraction);
    }

    output
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::domain::{
        rates::{RateEntry, RateIndex},
        report::{CountryGroup, CurrencySubtotal, SubsidiaryReport},
        sale::SaleLine,
        subsidiary::Subsidiary,
    };

    #[test]
    fn formats_amounts_in_locale_convention() {
        assert_eq!(format_amount(dec!(12.17), 2), "12,17");
        assert_eq!(format_amount(dec!(12.17), 4), "12,1700");
        assert_eq!(format_amount(dec!(1234567.891), 2), "1.234.567,89");
        assert_eq!(format_amount(dec!(-0.705), 2), "-0,71");
        assert_eq!(format_amount(dec!(0.8003), 5), "0,80030");
        assert_eq!(format_amount(dec!(1000), 0), "1.000");
    }

    fn sale(
        country: &str,
        currency: &str,
        product: &str,
        quantity: u32,
        amount: Decimal,
    ) -> SaleLine {
        SaleLine {
            country_code: country.to_owned(),
            currency_code: currency.to_owned(),
            product_name: product.to_owned(),
            quantity,
            proceeds_amount: amount,
            source_file: "report_EU.txt".to_owned(),
            line_number: 1,
        }
    }

    fn report() -> Report {
        let period_start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let period_end = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();
        let mut index = RateIndex::new(period_start, period_end);
        for (country, currency, rate) in [
            ("FI", "EUR", dec!(1.00000)),
            ("CH", "CHF", dec!(0.80030)),
            ("JP", "JPY", dec!(0.00817)),
        ] {
            index.insert(RateEntry {
                country_code: country.to_owned(),
                currency_code: currency.to_owned(),
                exchange_rate: rate,
                period_start,
                period_end,
            });
        }

        let sales = vec![
            sale("FI", "EUR", "Example App 5", 1, dec!(12.17)),
            sale("CH", "CHF", "Example App 5", 2, dec!(1.30)),
            sale("JP", "JPY", "Example App 5", 1, dec!(47.60)),
        ];
        Report::build(sales, &index, &Config::default()).unwrap()
    }

    #[test]
    fn renders_the_full_report_layout() {
        let text = render(&report(), &Config::default(), Detail::Full);

        let expected = "\
Sales date: 01.01.2026 – 31.01.2026


Apple Distribution International
Internet Software & Services
Hollyhill Industrial Estate
Hollyhill, Cork
Republic of Ireland
VAT ID: IE9700053D

Sales in Finland (FI)
\tQuantity\tProduct\tAmount\tExchange Rate\tAmount in EUR
\t1\tExample App 5\tEUR 12,17\t1,00000\t12,1700 €

\t\tSubtotal FI:\tEUR 12,17\t1,00000\t12,17 €

Sales in Switzerland (CH)
\tQuantity\tProduct\tAmount\tExchange Rate\tAmount in EUR
\t2\tExample App 5\tCHF 1,30\t0,80030\t1,0404 €

\t\tSubtotal CH:\tCHF 1,30\t0,80030\t1,04 €

EU Total:\t13,21 €


iTunes K.K.
〒 106-6140
6-10-1 Roppongi, Minato-ku, Tokyo
Japan

Sales in Japan (JP)
\tQuantity\tProduct\tAmount\tExchange Rate\tAmount in EUR
\t1\tExample App 5\tJPY 47,60\t0,00817\t0,3889 €

\t\tSubtotal JP:\tJPY 47,60\t0,00817\t0,39 €

JP Total:\t0,39 €
";
        assert_eq!(text, expected);
    }

    #[test]
    fn eu_total_line_follows_the_last_of_several_eu_members() {
        static EU_A: Subsidiary = Subsidiary {
            code: "E1",
            name: "Entity One",
            address_lines: &["Somewhere"],
            vat_id: Some("XX1"),
            is_eu_member: true,
        };
        static EU_B: Subsidiary = Subsidiary {
            code: "E2",
            name: "Entity Two",
            address_lines: &["Elsewhere"],
            vat_id: Some("XX2"),
            is_eu_member: true,
        };
        static OTHER: Subsidiary = Subsidiary {
            code: "O1",
            name: "Entity Three",
            address_lines: &["Offshore"],
            vat_id: None,
            is_eu_member: false,
        };

        let group = |country: &str, amount: Decimal| CountryGroup {
            country_code: country.to_owned(),
            country_name: "Somewhere",
            lines: Vec::new(),
            native_subtotals: vec![CurrencySubtotal {
                currency_code: "EUR".to_owned(),
                exchange_rate: dec!(1.00000),
                native_total: amount,
            }],
        };
        let report = Report {
            period_start: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            period_end: NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
            subsidiaries: vec![
                SubsidiaryReport {
                    subsidiary: &EU_A,
                    groups: vec![group("AA", dec!(10.00))],
                },
                SubsidiaryReport {
                    subsidiary: &OTHER,
                    groups: vec![group("BB", dec!(7.00))],
                },
                SubsidiaryReport {
                    subsidiary: &EU_B,
                    groups: vec![group("CC", dec!(2.50))],
                },
            ],
        };

        let text = render(&report, &Config::default(), Detail::Full);

        // one accumulator line, right after the last EU member's block
        assert_eq!(text.matches("EU Total:").count(), 1);
        assert!(text.ends_with("E2 Total:\t2,50 €\n\nEU Total:\t12,50 €\n"));
        assert!(text.contains("O1 Total:\t7,00 €"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let config = Config::default();
        let report = report();
        assert_eq!(
            render(&report, &config, Detail::Full),
            render(&report, &config, Detail::Full)
        );
    }

    #[test]
    fn no_subtotals_omits_subtotal_lines() {
        let text = render(&report(), &Config::default(), Detail::NoSubtotals);
        assert!(!text.contains("Subtotal"));
        assert!(text.contains("\t12,1700 €"));
    }

    #[test]
    fn only_subtotals_omits_conversion_columns() {
        let text = render(&report(), &Config::default(), Detail::OnlySubtotals);
        assert!(text.contains("\t1\tExample App 5\tEUR 12,17\n"));
        assert!(!text.contains("12,1700"));
        assert!(text.contains("Subtotal FI:"));
    }
}
