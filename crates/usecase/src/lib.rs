//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! This crate coordinates domain logic and ports:
//!
//! - [`controller`]: drive an output device from a threshold decision
//! - [`harness`]: build and run black-box suites against a subject function
//! - [`tables`]: load labeled range tables through a [`TableSource`](bbcheck_ports::tables::TableSource)
//! - [`dto`]: data transfer objects for use case boundaries
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod controller;
pub mod dto;
pub mod harness;
pub mod tables;

pub use controller::GateController;
pub use dto::SuiteReport;
pub use harness::{BlackBoxSuite, TestCase};
pub use tables::LoadTable;
