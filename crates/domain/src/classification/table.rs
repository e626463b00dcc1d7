use std::fmt;

use bbcheck_shared_kernel::{Bound, DomainError, DomainResult, Label};
use serde::{Deserialize, Serialize};

/// One inclusive range and the category it maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeEntry<C> {
    pub bound: Bound,
    pub category: C,
}

impl<C> RangeEntry<C> {
    pub const fn new(bound: Bound, category: C) -> Self {
        Self { bound, category }
    }
}

/// Ordered, non-overlapping ranges with a sentinel for values outside all of them.
///
/// Gaps between ranges are allowed; values falling into a gap classify as the
/// sentinel just like values outside the covered domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeTable<C> {
    name: String,
    entries: Vec<RangeEntry<C>>,
    invalid: C,
}

impl<C> RangeTable<C>
where
    C: Clone + PartialEq + fmt::Display,
{
    /// Build a table, validating ordering and sentinel rules.
    ///
    /// # Errors
    /// - [`DomainError::EmptyTable`] when `entries` is empty.
    /// - [`DomainError::OverlappingRanges`] when two neighbouring entries overlap.
    /// - [`DomainError::UnorderedRanges`] when entries are not ascending.
    /// - [`DomainError::InvalidLabel`] when a category equals the sentinel, or two
    ///   touching ranges share a category.
    pub fn new(name: impl Into<String>, entries: Vec<RangeEntry<C>>, invalid: C) -> DomainResult<Self> {
        let name = name.into();
        validate(&name, &entries, &invalid)?;
        Ok(Self { name, entries, invalid })
    }

    /// Skips validation. Only for tables whose invariants hold by construction.
    pub(crate) fn from_trusted(name: impl Into<String>, entries: Vec<RangeEntry<C>>, invalid: C) -> Self {
        Self { name: name.into(), entries, invalid }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entries(&self) -> &[RangeEntry<C>] {
        &self.entries
    }

    pub fn invalid(&self) -> &C {
        &self.invalid
    }

    /// The category whose range contains `value`, if any.
    pub fn classify(&self, value: i64) -> Option<&C> {
        let idx = self.entries.partition_point(|e| e.bound.upper() < value);
        self.entries
            .get(idx)
            .filter(|e| e.bound.contains(value))
            .map(|e| &e.category)
    }

    /// Like [`classify`](Self::classify) but falls back to the sentinel.
    pub fn category_for(&self, value: i64) -> &C {
        self.classify(value).unwrap_or(&self.invalid)
    }

    pub fn label_for(&self, value: i64) -> String {
        self.category_for(value).to_string()
    }
}

fn validate<C>(name: &str, entries: &[RangeEntry<C>], invalid: &C) -> DomainResult<()>
where
    C: PartialEq + fmt::Display,
{
    if entries.is_empty() {
        return Err(DomainError::EmptyTable { table: name.to_string() });
    }
    for entry in entries {
        if entry.category == *invalid {
            return Err(DomainError::InvalidLabel {
                label: entry.category.to_string(),
                reason: format!("collides with the invalid sentinel of table '{name}'"),
            });
        }
    }
    for pair in entries.windows(2) {
        let (prev, cur) = (&pair[0], &pair[1]);
        if prev.bound.overlaps(cur.bound) {
            return Err(DomainError::OverlappingRanges {
                table: name.to_string(),
                previous_lower: prev.bound.lower(),
                previous_upper: prev.bound.upper(),
                lower: cur.bound.lower(),
                upper: cur.bound.upper(),
            });
        }
        if prev.bound.upper() > cur.bound.lower() {
            return Err(DomainError::UnorderedRanges {
                table: name.to_string(),
                previous_lower: prev.bound.lower(),
                previous_upper: prev.bound.upper(),
                lower: cur.bound.lower(),
                upper: cur.bound.upper(),
            });
        }
        let touching = prev.bound.above() == Some(cur.bound.lower());
        if touching && prev.category == cur.category {
            return Err(DomainError::InvalidLabel {
                label: cur.category.to_string(),
                reason: format!("ranges {} and {} touch and share a label", prev.bound, cur.bound),
            });
        }
    }
    Ok(())
}

/// Serialized form of a labeled table, as read from JSON or YAML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSpec {
    pub name: String,
    #[serde(default = "default_invalid_label")]
    pub invalid_label: String,
    pub ranges: Vec<RangeSpec>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeSpec {
    pub lower: i64,
    pub upper: i64,
    pub label: String,
}

fn default_invalid_label() -> String {
    "Invalid".to_string()
}

impl TryFrom<TableSpec> for RangeTable<Label> {
    type Error = DomainError;

    fn try_from(spec: TableSpec) -> DomainResult<Self> {
        let invalid = Label::new(spec.invalid_label)?;
        let entries = spec
            .ranges
            .into_iter()
            .map(|r| -> DomainResult<RangeEntry<Label>> {
                Ok(RangeEntry::new(Bound::new(r.lower, r.upper)?, Label::new(r.label)?))
            })
            .collect::<DomainResult<Vec<_>>>()?;
        Self::new(spec.name, entries, invalid)
    }
}

impl From<&RangeTable<Label>> for TableSpec {
    fn from(table: &RangeTable<Label>) -> Self {
        Self {
            name: table.name.clone(),
            invalid_label: table.invalid.to_string(),
            ranges: table
                .entries
                .iter()
                .map(|e| RangeSpec {
                    lower: e.bound.lower(),
                    upper: e.bound.upper(),
                    label: e.category.to_string(),
                })
                .collect(),
        }
    }
}
