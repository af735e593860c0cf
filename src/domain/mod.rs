pub mod error;
pub mod rates;
pub mod report;
pub mod sale;
pub mod subsidiary;
