// crates/shared-kernel/src/value_objects/mod.rs
pub mod bound;
pub mod label;

pub use bound::Bound;
pub use label::Label;
