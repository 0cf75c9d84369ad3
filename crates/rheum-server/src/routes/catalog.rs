use axum::Json;

use rheum_core::catalog::{Catalog, catalog};

pub async fn get_catalog() -> Json<Catalog> {
    Json(catalog())
}
