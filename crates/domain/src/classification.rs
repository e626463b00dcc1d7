pub mod category;
pub mod table;

pub use category::{AGE_RANGES, AgeCategory, age_table, classify};
pub use table::{RangeEntry, RangeSpec, RangeTable, TableSpec};
