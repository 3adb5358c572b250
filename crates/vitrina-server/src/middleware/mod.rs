//! Middleware stack para el servidor HTTP.
//!
//! Middlewares aplicados a todas las requests:
//! - `request_id_middleware`: genera/propaga X-Request-Id
//! - `logging_middleware`: logging estructurado de requests

mod logging;
mod request_id;

pub use logging::logging_middleware;
pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
