//! Free-text and category filtering of in-memory record lists.
//!
//! A [`RecordFilter`] is configured once per record type with the fields
//! that take part in the text search and, optionally, the field that acts as
//! the category discriminator. Applying it never touches the input: it
//! returns references to the surviving records in their original order.

use std::fmt;

/// Sentinel category value meaning "no category restriction".
pub const ALL_CATEGORIES: &str = "all";

/// Reads one string field of a record.
pub type FieldAccessor<R> = fn(&R) -> &str;

/// Category part of a query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategorySelector {
    /// Every category is admitted
    #[default]
    All,
    /// Only records whose category equals this value exactly
    Only(String),
}

impl CategorySelector {
    /// Interprets `value`, mapping the `all` sentinel to [`CategorySelector::All`].
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }

    /// String form (`all` for [`CategorySelector::All`]).
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Only(value) => value,
        }
    }

    /// Whether a record with category `value` passes.
    #[must_use]
    pub fn admits(&self, value: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == value,
        }
    }

    /// Next selector in the cycle `All -> choices[0] -> ... -> All`.
    ///
    /// A selector that is not among `choices` restarts the cycle.
    #[must_use]
    pub fn cycle(&self, choices: &[&str]) -> Self {
        let next = match self {
            Self::All => choices.first(),
            Self::Only(current) => choices
                .iter()
                .position(|choice| *choice == current.as_str())
                .and_then(|index| choices.get(index + 1)),
        };
        next.map_or(Self::All, |choice| Self::Only((*choice).to_string()))
    }
}

impl fmt::Display for CategorySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Free-text query plus category selector.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterQuery {
    /// Substring searched in every searchable field (case-insensitive)
    pub text: String,
    /// Category restriction
    pub category: CategorySelector,
}

impl FilterQuery {
    /// Builds a query from raw UI values.
    #[must_use]
    pub fn new(text: &str, category: &str) -> Self {
        Self {
            text: text.to_string(),
            category: CategorySelector::parse(category),
        }
    }

    /// A text-only query (category `all`).
    #[must_use]
    pub fn text(text: &str) -> Self {
        Self::new(text, ALL_CATEGORIES)
    }
}

/// Filter over records of type `R`.
pub struct RecordFilter<R> {
    search_fields: Vec<FieldAccessor<R>>,
    category_field: Option<FieldAccessor<R>>,
}

impl<R> fmt::Debug for RecordFilter<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordFilter")
            .field("search_fields", &self.search_fields.len())
            .field("has_category_field", &self.category_field.is_some())
            .finish()
    }
}

impl<R> Default for RecordFilter<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> RecordFilter<R> {
    /// A filter with no searchable fields and no category field.
    #[must_use]
    pub fn new() -> Self {
        Self {
            search_fields: Vec::new(),
            category_field: None,
        }
    }

    /// Adds a field to the text search.
    #[must_use]
    pub fn search_field(mut self, accessor: FieldAccessor<R>) -> Self {
        self.search_fields.push(accessor);
        self
    }

    /// Designates the category discriminator.
    #[must_use]
    pub fn category_field(mut self, accessor: FieldAccessor<R>) -> Self {
        self.category_field = Some(accessor);
        self
    }

    /// Whether `record` satisfies both predicates of `query`.
    #[must_use]
    pub fn matches(&self, record: &R, query: &FilterQuery) -> bool {
        self.matches_folded(record, &query.text.to_lowercase(), &query.category)
    }

    /// Returns the records matching `query`, in input order.
    #[must_use]
    pub fn apply<'r>(&self, records: &'r [R], query: &FilterQuery) -> Vec<&'r R> {
        let needle = query.text.to_lowercase();
        records
            .iter()
            .filter(|record| self.matches_folded(record, &needle, &query.category))
            .collect()
    }

    fn matches_folded(&self, record: &R, needle: &str, category: &CategorySelector) -> bool {
        self.matches_text(record, needle) && self.matches_category(record, category)
    }

    fn matches_text(&self, record: &R, needle: &str) -> bool {
        // Whitespace is not trimmed: "  " only matches fields containing it
        needle.is_empty()
            || self
                .search_fields
                .iter()
                .any(|field| field(record).to_lowercase().contains(needle))
    }

    fn matches_category(&self, record: &R, category: &CategorySelector) -> bool {
        match self.category_field {
            Some(field) => category.admits(field(record)),
            None => true,
        }
    }
}

/// One-shot form of [`RecordFilter::apply`] taking raw UI values.
#[must_use]
pub fn filter_records<'r, R>(
    records: &'r [R],
    query: &str,
    category: &str,
    search_fields: &[FieldAccessor<R>],
    category_field: Option<FieldAccessor<R>>,
) -> Vec<&'r R> {
    let filter = RecordFilter {
        search_fields: search_fields.to_vec(),
        category_field,
    };
    filter.apply(records, &FilterQuery::new(query, category))
}
