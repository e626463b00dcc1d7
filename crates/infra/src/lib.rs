// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod drivers;
pub mod observer;
pub mod persistence;

pub use drivers::{DriverEvent, LoggingDriver, NullDriver, RecordingDriver};
pub use observer::LogObserver;
pub use persistence::{FileReader, FileTableSource, FileWriter, TableFormat};
