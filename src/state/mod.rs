pub mod app_state;
pub mod case_config;
pub mod case_input;
pub mod chart_state;
pub mod theme;
