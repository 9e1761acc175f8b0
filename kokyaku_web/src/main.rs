#![recursion_limit = "256"]

mod error;
mod openapi;
mod routes;

use std::{error::Error, net::SocketAddr};

use axum_server::tls_rustls::RustlsConfig;
use kokyaku::{
    domain::customer::CustomerRepository, infrastructure::InMemoryCustomerRepository,
    KokyakuConfig,
};
use tracing::{error, info, Level};

use crate::routes::AppState;

#[tokio::main]
async fn main() {
    match KokyakuConfig::load() {
        Ok(config) => {
            tracing_subscriber::fmt()
                .with_max_level(Level::from(&config.logger.level))
                .init();
            if let Err(error) = serve(&config).await {
                error!("アプリケーションエラー: {}", error);
            }
        }
        Err(error) => {
            tracing_subscriber::fmt::init();
            error!("設定読み込みエラー: {}", error)
        }
    }
}

async fn serve(config: &KokyakuConfig) -> Result<(), Box<dyn Error>> {
    let repository = InMemoryCustomerRepository::seeded(&mut rand::rng());
    info!("シードデータを投入: {}件", repository.count().await);

    let app = routes::router(AppState::new(repository));
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    match &config.server.tls {
        Some(tls) => {
            let rustls = RustlsConfig::from_pem_file(&tls.cert, &tls.key).await?;
            info!("HTTPSで待ち受け開始: {}", addr);
            axum_server::bind_rustls(addr, rustls)
                .serve(app.into_make_service())
                .await?;
        }
        None => {
            info!("HTTPで待ち受け開始: {}", addr);
            axum_server::bind(addr)
                .serve(app.into_make_service())
                .await?;
        }
    }
    Ok(())
}
