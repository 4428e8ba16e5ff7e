pub mod cases;
pub mod generator;
pub mod polynomial;
pub mod statistics;
