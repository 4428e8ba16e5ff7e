//! Multi-case polynomial time-series dashboard.
//!
//! The computational core ([`processing`], [`data`], [`state::case_config`])
//! has no UI dependency beyond color helpers and can be used headless:
//! build a [`state::case_config::CaseConfig`] per case, run
//! [`processing::cases::evaluate_cases`], and export with [`data::export`].

pub mod app;
pub mod data;
pub mod error;
pub mod processing;
pub mod state;
pub mod ui;
