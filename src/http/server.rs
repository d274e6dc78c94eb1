//! HTTP server startup logic.

use std::future::Future;
use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;

use crate::config::AppConfig;

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind server to {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Start the HTTP server based on configuration.
///
/// Serves until SIGINT/SIGTERM. A bind failure is returned immediately;
/// there is no retry.
pub async fn start_server(app: Router, config: &AppConfig) -> Result<(), ServerError> {
    run(app, config, shutdown::shutdown_signal()).await
}

/// Bind, announce the port and environment, then serve until `shutdown`.
pub async fn run<F>(app: Router, config: &AppConfig, shutdown: F) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = bind(config).await?;
    let port = listener
        .local_addr()
        .map(|addr| addr.port())
        .unwrap_or(config.http.port);

    tracing::info!("Server running on port {}", port);
    tracing::info!("Environment: {}", config.app.environment);

    serve(listener, app, shutdown).await
}

/// Bind the listening socket at `http.host:http.port`.
pub async fn bind(config: &AppConfig) -> Result<TcpListener, ServerError> {
    let addr = SocketAddr::new(config.http.host, config.http.port);
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })
}

/// Serve `app` on an already-bound listener until `shutdown` resolves.
///
/// In-flight requests are allowed to finish after `shutdown` fires.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        tracing::debug!(%addr, "Accepting connections");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::debug!("Server stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::log_filter_directives;
    use crate::state::AppState;
    use crate::test_support::CapturedLogs;
    use std::net::{IpAddr, Ipv4Addr};

    fn loopback_config(port: u16) -> AppConfig {
        let mut config = AppConfig::default();
        config.http.host = IpAddr::V4(Ipv4Addr::LOCALHOST);
        config.http.port = port;
        config
    }

    #[tokio::test]
    async fn bind_uses_configured_port() {
        let probe = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = probe.local_addr().unwrap().port();
        drop(probe);

        let listener = bind(&loopback_config(port)).await.unwrap();
        assert_eq!(listener.local_addr().unwrap().port(), port);
    }

    #[tokio::test]
    async fn bind_fails_when_port_is_taken() {
        let taken = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = taken.local_addr().unwrap().port();

        let err = bind(&loopback_config(port)).await.unwrap_err();
        match err {
            ServerError::Bind { addr, .. } => assert_eq!(addr.port(), port),
            other => panic!("expected bind error, got {other:?}"),
        }
    }

    async fn startup_lines(config: AppConfig, filter: &str) -> Vec<String> {
        let logs = CapturedLogs::default();
        let _guard = tracing::subscriber::set_default(logs.subscriber(filter));

        let app = crate::routes::create_router(AppState::new(config.clone()));
        run(app, &config, async {}).await.unwrap();

        logs.lines()
    }

    #[tokio::test]
    async fn announces_port_then_environment_after_bind() {
        let probe = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = probe.local_addr().unwrap().port();
        drop(probe);

        let mut config = loopback_config(port);
        config.app.environment = "production".to_string();

        let lines = startup_lines(config, "devops_studio_app=info").await;
        assert_eq!(lines.len(), 2, "unexpected output: {lines:?}");
        assert!(lines[0].ends_with(&format!("Server running on port {port}")));
        assert!(lines[1].ends_with("Environment: production"));
    }

    #[tokio::test]
    async fn quiet_filter_keeps_startup_lines() {
        let lines = startup_lines(loopback_config(0), &log_filter_directives("warn")).await;
        assert_eq!(lines.len(), 2, "unexpected output: {lines:?}");
        assert!(lines[0].contains("Server running on port "));
        assert!(!lines[0].ends_with("port 0"));
        assert!(lines[1].ends_with("Environment: development"));
    }

    #[tokio::test]
    async fn nothing_is_announced_when_bind_fails() {
        let taken = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let config = loopback_config(taken.local_addr().unwrap().port());

        let logs = CapturedLogs::default();
        let _guard = tracing::subscriber::set_default(logs.subscriber("devops_studio_app=info"));

        let app = crate::routes::create_router(AppState::new(config.clone()));
        let err = run(app, &config, async {}).await.unwrap_err();

        assert!(matches!(err, ServerError::Bind { .. }));
        assert!(logs.lines().is_empty());
    }
}
