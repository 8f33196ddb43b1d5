//! Listener setup and the serve loop.

use std::future::Future;
use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::{error, info};

use crate::api::{create_router, AppState};
use crate::config::Config;
use crate::error::{Result, ServiceError};

/// Bind the configured `HOST:PORT`. Host names are resolved.
pub async fn bind(config: &Config) -> Result<TcpListener> {
    let listener = TcpListener::bind(config.bind_target())
        .await
        .map_err(|source| {
            error!("Failed to bind {}: {}", config.bind_addr(), source);
            ServiceError::Bind {
                addr: config.bind_addr(),
                source,
            }
        })?;

    info!("HTTP server listening on {}", listener.local_addr()?);
    Ok(listener)
}

/// Serve the API on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let router = create_router(state);

    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown)
    .await?;

    info!("HTTP server stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn bind_reports_address_in_use() {
        let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = taken.local_addr().unwrap().port();

        let config = Config {
            host: "127.0.0.1".to_string(),
            port,
            ..Config::default()
        };

        match bind(&config).await {
            Err(ServiceError::Bind { addr, .. }) => assert_eq!(addr, format!("127.0.0.1:{port}")),
            other => panic!("expected bind error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn bind_rejects_unresolvable_host() {
        let config = Config {
            host: "not a host".to_string(),
            port: 0,
            ..Config::default()
        };

        assert!(matches!(bind(&config).await, Err(ServiceError::Bind { .. })));
    }
}
