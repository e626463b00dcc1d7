use std::path::Path;

use bbcheck_domain::RangeTable;
use bbcheck_ports::tables::TableSource;
use bbcheck_shared_kernel::{ErrorContext, Label, Result};
use log::info;

/// Loads a table description and validates it into a [`RangeTable`].
pub struct LoadTable<'a> {
    source: &'a dyn TableSource,
}

impl<'a> LoadTable<'a> {
    pub fn new(source: &'a dyn TableSource) -> Self {
        Self { source }
    }

    /// # Errors
    /// Propagates source failures and table validation errors, with the path as context.
    pub fn run(&self, path: &Path) -> Result<RangeTable<Label>> {
        let spec = self.source.load(path)?;
        let table = RangeTable::try_from(spec)
            .with_context(|| format!("validating table from '{}'", path.display()))?;
        info!("loaded table '{}' with {} ranges", table.name(), table.entries().len());
        Ok(table)
    }
}
