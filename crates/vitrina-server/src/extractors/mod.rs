//! Custom extractors for the catalog endpoints.

mod list_params;

pub use list_params::ListParams;
