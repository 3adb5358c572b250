use serde::Serialize;

use vitrina_core::{Item, PageQuery};

/// Vista de un item expuesta por la API.
///
/// El identificador interno del store no se expone; la API identifica
/// items por nombre.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemResponse {
    /// Nombre unico del item
    pub name: String,

    /// Precio unitario
    pub price: f64,

    /// Cantidad en stock
    pub stock: u32,
}

impl From<&Item> for ItemResponse {
    fn from(item: &Item) -> Self {
        Self {
            name: item.name().to_string(),
            price: item.price(),
            stock: item.stock(),
        }
    }
}

/// Una pagina de items con sus metadatos de paginacion.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPageResponse {
    /// Items de la pagina, ya ordenados
    pub content: Vec<ItemResponse>,

    /// Numero de pagina (base cero)
    pub page: u32,

    /// Tamano de pagina solicitado
    pub size: u32,

    /// Total de items en el catalogo
    pub total_elements: u64,

    /// Total de paginas para este tamano
    pub total_pages: u64,
}

impl ItemPageResponse {
    /// Construye la pagina a partir del resultado del store.
    /// El tamano de pagina es positivo (lo garantiza el query parser).
    pub fn new(items: &[Item], query: &PageQuery, total_elements: u64) -> Self {
        Self {
            content: items.iter().map(ItemResponse::from).collect(),
            page: query.page(),
            size: query.size(),
            total_elements,
            total_pages: total_elements.div_ceil(query.size() as u64),
        }
    }
}
