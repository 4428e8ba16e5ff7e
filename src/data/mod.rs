pub mod datetime;
pub mod export;
pub mod time_series;
