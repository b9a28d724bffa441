use std::sync::Arc;

use clap::Parser;
use tracing::info;

use crate::{
    application::{
        http::server::http_server::{router, state},
        logger::init_logger,
    },
    args::Args,
};

mod application;
mod args;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Arc::new(Args::parse());
    init_logger(&args.log);

    let state = state(args.clone()).await?;
    let router = router(state)?;

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", args.server.port)).await?;
    info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, router).await?;

    Ok(())
}
