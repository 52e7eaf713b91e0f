//! Lodestar Harness: concrete worlds and run orchestration for the engine.
//!
//! The harness drives a [`contract::HarnessWorld`] through
//! `lodestar_search::search::search` under a [`config::RunConfig`], binds the
//! outcome to the world and policy as a [`runner::RunReport`], and persists
//! reports as fail-closed directories.
//!
//! The harness does NOT implement search logic; it delegates to the engine.
//! Worlds provide domain data only; the harness owns orchestration.

#![forbid(unsafe_code)]

pub mod config;
pub mod contract;
pub mod report_dir;
pub mod runner;
pub mod telemetry;
pub mod worlds;
