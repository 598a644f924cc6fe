#![recursion_limit = "4096"]

#[cfg(feature = "ssr")]
#[derive(Debug, thiserror::Error)]
enum ServerError {
    #[error("Leptos configuration error: {0}")]
    Configuration(#[from] leptos::config::errors::LeptosConfigError),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(std::io::Error),
}

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> std::process::ExitCode {
    // Load .env file (if exists)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    match serve().await {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            std::process::ExitCode::FAILURE
        }
    }
}

#[cfg(feature = "ssr")]
async fn serve() -> Result<(), ServerError> {
    use axum::Router;
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use tower_http::compression::{CompressionLayer, CompressionLevel};
    use tower_http::services::ServeDir;
    use zera_xii::app::*;
    use zera_xii::core::config::Config;

    let config = Config::from_env();
    tracing::info!(
        "Config loaded: asset_dir={:?}, compression={}",
        config.asset_dir,
        config.compression
    );

    // Load configuration from Cargo.toml [package.metadata.leptos]
    // Can be overridden via LEPTOS_SITE_ADDR env var
    let conf = get_configuration(None)?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    let routes = generate_route_list(App);

    // Serves .br (brotli) and .gz (gzip) siblings automatically
    let pkg_service = ServeDir::new(format!("{}/pkg", leptos_options.site_root))
        .precompressed_br()
        .precompressed_gzip();

    let mut app = Router::new().nest_service("/pkg", pkg_service);

    // Images otherwise come from the site root through the fallback handler
    if let Some(dir) = &config.asset_dir {
        tracing::info!("Serving /images from {}", dir.display());
        app = app.nest_service("/images", ServeDir::new(dir));
    }

    let mut app = app
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options);

    if config.compression {
        app = app.layer(
            CompressionLayer::new()
                .br(true)
                .gzip(true)
                .quality(CompressionLevel::Best),
        );
    }

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    tracing::info!("listening on http://{}", &addr);

    axum::serve(listener, app.into_make_service())
        .await
        .map_err(ServerError::Serve)
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
