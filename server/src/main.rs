//! Timeline site server binary.

use std::path::Path;

use leptos::config::get_configuration;
use server::{Result, create_router};

#[tokio::main]
async fn main() -> Result<()> {
    simple_logger::init_with_level(log::Level::Info)?;

    // Reads [[workspace.metadata.leptos]] or the LEPTOS_* env vars cargo-leptos sets
    let conf = get_configuration(None)?;
    let options = conf.leptos_options;
    let addr = options.site_addr;

    let app = create_router(Path::new(options.site_root.as_ref()));

    log::info!("serving {} on http://{addr}", options.site_root);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
