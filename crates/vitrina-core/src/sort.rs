//! Sort-field allow-list validation.

use crate::error::{CatalogError, Result};
use crate::page::PageQuery;

/// Fields a listing query may sort by.
pub const VALID_SORT_FIELDS: [&str; 3] = ["name", "price", "stock"];

/// Checks every sort-field token of `query` against the allow-list,
/// in order, and fails on the first token outside it.
///
/// Runs before any store or cache interaction; on success it has no
/// side effects. Tokens are matched exactly (no case folding).
///
/// # Example
///
/// ```
/// use vitrina_core::{PageQuery, SortOrder, validate_sort};
///
/// let query = PageQuery::new(0, 10).with_sort(vec![SortOrder::asc("bogus")]);
/// let err = validate_sort(&query).unwrap_err();
/// assert_eq!(err.to_string(), "Invalid sort field: bogus");
/// ```
pub fn validate_sort(query: &PageQuery) -> Result<()> {
    for order in query.sort() {
        if !VALID_SORT_FIELDS.contains(&order.field()) {
            return Err(CatalogError::invalid_sort_field(order.field()));
        }
    }
    Ok(())
}
