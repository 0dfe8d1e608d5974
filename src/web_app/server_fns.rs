// web_app/server_fns.rs - Leptos server function declarations
//
// The #[server] macro generates:
// - On server: The actual function implementation
// - On client: A stub that makes HTTP POST requests to the server
//
// This file must be compiled for BOTH ssr and hydrate features.

use leptos::prelude::*;
use leptos::server_fn::codec::Json;

use crate::web_app::model::Business;
use crate::web_app::query::BusinessQuery;

/// Resolve the injected directory store.
///
/// The server registers the store both as Leptos context (for SSR and
/// server functions) and as Actix app data; either is accepted.
#[cfg(feature = "ssr")]
async fn store() -> Result<crate::web_app::store::SharedStore, ServerFnError> {
    use crate::web_app::error::DirectoryError;
    use crate::web_app::store::SharedStore;
    use actix_web::{web::Data, HttpRequest};
    use leptos_actix::extract;

    if let Some(store) = use_context::<SharedStore>() {
        return Ok(store);
    }

    match extract::<HttpRequest>().await {
        Ok(req) => {
            if let Some(store) = req.app_data::<Data<SharedStore>>() {
                return Ok(store.get_ref().clone());
            }
            tracing::warn!("SharedStore NOT found in request app_data");
        }
        Err(e) => {
            tracing::error!("Failed to extract HttpRequest: {}", e);
        }
    }

    Err(ServerFnError::new(DirectoryError::StoreUnavailable))
}

/// All category names, sorted ascending
#[server(ListCategories, "/api")]
pub async fn list_categories() -> Result<Vec<String>, ServerFnError> {
    let store = store().await?;

    let result = store.list_categories().await;
    match &result {
        Ok(names) => tracing::info!("Category request: {} categories", names.len()),
        Err(e) => tracing::error!("Category request failed: {}", e),
    }

    result.map_err(|e| ServerFnError::new(format!("Failed to load categories: {}", e)))
}

/// Run a structured business query built by the directory page
#[server(name = QueryBusinesses, prefix = "/api", input = Json)]
pub async fn query_businesses(query: BusinessQuery) -> Result<Vec<Business>, ServerFnError> {
    tracing::info!(
        "Business request: {} clauses, order by {} {:?}",
        query.clauses.len(),
        query.order.field,
        query.order.direction
    );

    let store = store().await?;

    let result = store.fetch_businesses(&query).await;
    match &result {
        Ok(rows) => tracing::info!("Business request successful: found {} businesses", rows.len()),
        Err(e) => tracing::error!("Business request failed: {}", e),
    }

    result.map_err(|e| ServerFnError::new(format!("Failed to fetch businesses: {}", e)))
}
