//! Roster aggregation pipeline: remote fetching, document parsing, merging
//! and report assembly.
//!
//! The [`api`] module owns transport (the platform client, batched stats
//! queries, the schedule service and the pipeline orchestrator), [`models`]
//! owns wire documents and canonical records, and [`processors`] owns the
//! pure parse/merge steps between them.

pub mod api;
pub mod models;
pub mod processors;

pub use api::fetch_roster_report;
pub use models::{PlayerRecord, RankingCriterion, RosterReport};
