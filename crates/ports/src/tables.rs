// crates/ports/src/tables.rs
use std::path::Path;

use bbcheck_domain::TableSpec;
use bbcheck_shared_kernel::Result;

/// Port for loading labeled range tables.
pub trait TableSource: Send + Sync {
    fn load(&self, path: &Path) -> Result<TableSpec>;
}
