//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! This crate defines traits that abstract external concerns:
//!
//! - [`output`]: the device switched by a threshold gate
//! - [`observer`]: per-case progress while a suite runs
//! - [`tables`]: where labeled range tables come from
//!
//! These ports keep the decision logic testable with doubles in place of hardware.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod observer;
pub mod output;
pub mod tables;
