// Local directory web server
//
// This binary starts the web server with:
// - Actix-web for HTTP serving
// - Leptos for SSR (server-side rendering)
// - The directory store (PostgreSQL or in-memory), injected into every request
// - Static file serving

#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    use actix_files::Files;
    use actix_web::{web, App, HttpServer};
    use leptos::prelude::*;
    use leptos_actix::{generate_route_list, handle_server_fns_with_context, LeptosRoutes};
    use leptos_meta::MetaTags;
    use local_directory::web_app::app::App as WebApp;
    use local_directory::web_app::config::ServerConfig;
    use tracing_subscriber::EnvFilter;

    // Load environment variables before anything reads them
    dotenv::dotenv().ok();

    // Initialize logging (RUST_LOG, default info)
    tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(false)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env().map_err(|e| std::io::Error::other(e.to_string()))?;
    let store = build_store(&config).await.map_err(|e| std::io::Error::other(e.to_string()))?;

    // Leptos configuration
    let conf = leptos_config::get_configuration(None).map_err(|e| std::io::Error::other(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let site_root = leptos_options.site_root.clone();

    tracing::info!("Starting server at http://{}", addr);

    HttpServer::new(move || {
        // Generate the list of routes in the Leptos App
        let routes = generate_route_list(WebApp);
        let leptos_options_inner = leptos_options.clone();
        let site_root_str = site_root.clone().to_string();
        let server_fn_store = store.clone();
        let route_store = store.clone();

        App::new()
            // Store as app data for request-based lookup
            .app_data(web::Data::new(store.clone()))
            // Server functions see the store through Leptos context
            .route(
                "/api/{tail:.*}",
                handle_server_fns_with_context(move || provide_context(server_fn_store.clone())),
            )
            // Serve JS/WASM/CSS from pkg directory
            .service(Files::new("/pkg", format!("{site_root_str}/pkg")))
            // Leptos routes for SSR with proper shell
            .leptos_routes_with_context(
                routes,
                move || provide_context(route_store.clone()),
                {
                    let leptos_options = leptos_options_inner.clone();
                    move || {
                        view! {
                            <!DOCTYPE html>
                            <html lang="en">
                                <head>
                                    <meta charset="utf-8"/>
                                    <meta name="viewport" content="width=device-width, initial-scale=1"/>
                                    <AutoReload options=leptos_options.clone() />
                                    <HydrationScripts options=leptos_options.clone()/>
                                    <MetaTags/>
                                </head>
                                <body>
                                    <WebApp/>
                                </body>
                            </html>
                        }
                    }
                },
            )
            .app_data(web::Data::new(leptos_options_inner.clone()))
    })
    .bind(&addr)?
    .run()
    .await
}

/// Connect the configured backend and make sure it has data to serve
#[cfg(feature = "ssr")]
async fn build_store(
    config: &local_directory::web_app::config::ServerConfig,
) -> Result<local_directory::web_app::store::SharedStore, local_directory::web_app::error::DirectoryError> {
    use local_directory::web_app::api::{db, PgDirectory};
    use local_directory::web_app::config::StoreBackend;
    use local_directory::web_app::store::MemoryDirectory;
    use std::sync::Arc;

    match &config.backend {
        StoreBackend::Postgres { database_url, max_connections } => {
            let pool = db::create_pool(database_url, *max_connections).await?;
            tracing::info!("Connected to database (max {} connections)", max_connections);

            db::init_schema(&pool).await?;

            // Seed failures are not fatal: the page simply shows no results
            if let Err(e) = db::seed_if_empty(&pool, &config.seed_path).await {
                tracing::error!("Failed to seed database: {}", e);
            }

            Ok(Arc::new(PgDirectory::new(pool)))
        }
        StoreBackend::Memory => {
            let store = MemoryDirectory::from_json_file(&config.seed_path)?;
            tracing::info!("Serving {} businesses from the in-memory store", store.len());
            Ok(Arc::new(store))
        }
    }
}

#[cfg(not(feature = "ssr"))]
fn main() {
    panic!("This binary requires the 'ssr' feature. Run with: cargo leptos watch");
}
