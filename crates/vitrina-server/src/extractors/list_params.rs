//! Query-parameter parsing for listing requests.

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;

use vitrina_core::{PageQuery, SortDirection, SortOrder};

use crate::error::AppError;

/// Paging por defecto cuando la request no trae parametros.
const DEFAULT_PAGE: u32 = 0;
const DEFAULT_PAGE_SIZE: u32 = 10;

/// Extractor que parsea `page`, `size` y `sort` en una [`PageQuery`].
///
/// Este es el parser upstream del catalogo: rechaza con 400 paginas
/// negativas (tipo unsigned), `size` cero y valores no numericos, antes
/// de que el core corra. Sintaxis de sort: `sort=campo`, `sort=campo,dir`
/// o `sort=campo1,campo2,dir` (la direccion final aplica a todos los
/// campos que la preceden); el parametro puede repetirse y el orden de
/// aparicion se conserva.
///
/// Un token final que no es `asc` ni `desc` se trata como un campo mas
/// con direccion ascendente, de modo que `sort=name,bogus` falla en la
/// validacion de campos con "Invalid sort field: bogus".
#[derive(Debug)]
pub struct ListParams(pub PageQuery);

impl<S> FromRequestParts<S> for ListParams
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(|err| AppError::BadRequest(err.body_text()))?;

        let mut page = DEFAULT_PAGE;
        let mut size = DEFAULT_PAGE_SIZE;
        let mut sort: Vec<SortOrder> = Vec::new();

        for (key, value) in &pairs {
            match key.as_str() {
                "page" => {
                    page = value.parse().map_err(|_| {
                        AppError::BadRequest("page must be a non-negative integer".to_string())
                    })?;
                },
                "size" => {
                    size = value.parse().map_err(|_| {
                        AppError::BadRequest("size must be a positive integer".to_string())
                    })?;
                },
                "sort" => sort.extend(parse_sort(value)),
                _ => {},
            }
        }

        if size == 0 {
            return Err(AppError::BadRequest(
                "size must be greater than zero".to_string(),
            ));
        }

        if sort.is_empty() {
            sort.push(SortOrder::asc("name"));
        }

        Ok(ListParams(PageQuery::new(page, size).with_sort(sort)))
    }
}

/// Parsea un valor de `sort`. Si el ultimo token es una direccion, aplica
/// a todos los campos anteriores; si no, todos los tokens son campos.
fn parse_sort(value: &str) -> Vec<SortOrder> {
    let tokens: Vec<&str> = value
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect();

    let Some((&last, fields)) = tokens.split_last() else {
        return Vec::new();
    };

    match last.parse::<SortDirection>() {
        Ok(direction) if !fields.is_empty() => fields
            .iter()
            .map(|field| SortOrder::new(*field, direction))
            .collect(),
        // un token suelto, o uno que no es direccion, es un campo
        _ => tokens.iter().map(|field| SortOrder::asc(*field)).collect(),
    }
}
