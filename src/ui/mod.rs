pub mod case_sidebar;
pub mod chart_panel;
pub mod metrics_table;
