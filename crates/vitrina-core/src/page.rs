//! Listing query types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Direction of a sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    /// Returns the wire token for this direction.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a direction token is neither `asc` nor `desc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDirectionError(pub String);

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not a sort direction: {}", self.0)
    }
}

impl std::error::Error for ParseDirectionError {}

impl FromStr for SortDirection {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("asc") {
            Ok(Self::Ascending)
        } else if s.eq_ignore_ascii_case("desc") {
            Ok(Self::Descending)
        } else {
            Err(ParseDirectionError(s.to_string()))
        }
    }
}

/// A single (field, direction) pair of a sort specification.
///
/// The field is kept as the raw token so the allow-list validator can
/// report exactly what the caller sent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortOrder {
    field: String,
    direction: SortDirection,
}

impl SortOrder {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    /// Shorthand for an ascending order on `field`.
    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Ascending)
    }

    /// Shorthand for a descending order on `field`.
    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Descending)
    }

    /// Returns the sort field token.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Returns the sort direction.
    pub fn direction(&self) -> SortDirection {
        self.direction
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.field, self.direction)
    }
}

/// A paginated, sorted listing query.
///
/// Two queries are equivalent iff page number, page size and the ordered
/// sort sequence are element-wise equal; `PartialEq`/`Hash` are derived
/// accordingly. Page-range checks (non-negative page, positive size) are
/// the responsibility of the upstream query parser.
///
/// # Example
///
/// ```
/// use vitrina_core::{PageQuery, SortOrder};
///
/// let a = PageQuery::new(0, 10).with_sort(vec![SortOrder::asc("name")]);
/// let b = PageQuery::new(0, 10).with_sort(vec![SortOrder::asc("name")]);
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageQuery {
    page: u32,
    size: u32,
    sort: Vec<SortOrder>,
}

impl PageQuery {
    /// Creates an unsorted query for the given page and size.
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page,
            size,
            sort: Vec::new(),
        }
    }

    /// Returns a query with the given sort specification.
    pub fn with_sort(mut self, sort: Vec<SortOrder>) -> Self {
        self.sort = sort;
        self
    }

    /// Returns the zero-based page number.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Returns the page size.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Returns the ordered sort specification.
    pub fn sort(&self) -> &[SortOrder] {
        &self.sort
    }
}

impl Default for PageQuery {
    /// The catalog's default paging: first page of ten, sorted by name.
    fn default() -> Self {
        Self::new(0, 10).with_sort(vec![SortOrder::asc("name")])
    }
}

impl fmt::Display for PageQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "page {} size {}", self.page, self.size)?;
        if !self.sort.is_empty() {
            write!(f, " sort ")?;
            for (i, order) in self.sort.iter().enumerate() {
                if i > 0 {
                    write!(f, ",")?;
                }
                write!(f, "{}", order)?;
            }
        }
        Ok(())
    }
}
