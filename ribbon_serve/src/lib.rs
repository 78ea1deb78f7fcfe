use anyhow::Context as _;
use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Extension, Router,
};
use tower_http::cors::CorsLayer;

use ribbon_helix::StreamDirectory;

mod handlers;
mod response;

pub async fn start_server(
    addr: impl tokio::net::ToSocketAddrs + Send + 'static,
    directory: StreamDirectory,
    allowed_origin: Option<&str>,
) -> anyhow::Result<()> {
    let addr = tokio::net::lookup_host(addr)
        .await?
        .next()
        .with_context(|| "could not resolve an addr")?;

    let app = router(directory, allowed_origin)?;

    log::info!("listening on host: {addr}");
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;
    Ok(())
}

pub fn router(
    directory: StreamDirectory,
    allowed_origin: Option<&str>,
) -> anyhow::Result<Router> {
    let mut cors = CorsLayer::new().allow_methods(vec![Method::GET]);
    if let Some(origin) = allowed_origin {
        cors = cors.allow_origin(
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("invalid allowed origin '{origin}'"))?,
        );
    }

    Ok(Router::new()
        .route("/api/streams", get(handlers::streams))
        .layer(Extension(directory))
        .layer(cors))
}
