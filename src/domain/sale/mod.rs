use rust_decimal::Decimal;

/// One sale line from an App Store Connect financial report, with the
/// proceeds amount in the sale's native currency.
///
/// The source file and line number are kept so that lookup failures during
/// aggregation can point back at the offending report line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaleLine {
    pub country_code: String,
    pub currency_code: String,
    pub product_name: String,
    pub quantity: u32,
    pub proceeds_amount: Decimal,
    pub source_file: String,
    pub line_number: u64,
}
