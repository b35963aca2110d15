#[cfg(feature = "csv-io")]
pub mod csv;
pub mod json;
