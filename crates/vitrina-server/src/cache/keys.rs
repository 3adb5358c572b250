//! Cache key derivation for the page region.

use std::fmt;

use vitrina_core::{PageQuery, SortDirection};

/// Key unica para la region de paginas.
///
/// Projection pura de (page, size, secuencia de sort) de una
/// [`PageQuery`]; queries equivalentes producen keys iguales, y dos
/// secuencias de sort distintas (mismos campos en otro orden, u otra
/// direccion) producen keys distintas.
///
/// # Examples
///
/// ```
/// use vitrina_core::{PageQuery, SortOrder};
/// use vitrina_server::cache::PageCacheKey;
///
/// let a = PageQuery::new(0, 10).with_sort(vec![SortOrder::asc("name")]);
/// let b = PageQuery::new(0, 10).with_sort(vec![SortOrder::asc("name")]);
/// assert_eq!(PageCacheKey::from_query(&a), PageCacheKey::from_query(&b));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageCacheKey {
    page: u32,
    size: u32,
    sort: Vec<(String, SortDirection)>,
}

impl PageCacheKey {
    /// Deriva la key desde una query. Sin estado oculto: solo page, size
    /// y la secuencia ordenada de sort participan.
    pub fn from_query(query: &PageQuery) -> Self {
        Self {
            page: query.page(),
            size: query.size(),
            sort: query
                .sort()
                .iter()
                .map(|order| (order.field().to_string(), order.direction()))
                .collect(),
        }
    }

    /// Retorna el numero de pagina.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Retorna el tamano de pagina.
    pub fn size(&self) -> u32 {
        self.size
    }
}

impl fmt::Display for PageCacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:", self.page, self.size)?;
        if self.sort.is_empty() {
            return f.write_str("unsorted");
        }
        for (i, (field, direction)) in self.sort.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}.{}", field, direction)?;
        }
        Ok(())
    }
}
