use actix_web::dev::ServerHandle;
use sqlx::{Pool, Postgres};
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Coordinates graceful teardown: wait for a signal, stop the HTTP server,
/// drain in-flight requests, then close the connection pool.
pub struct ShutdownCoordinator {
    server_handle: ServerHandle,
    server_task: JoinHandle<Result<(), std::io::Error>>,
    pool: Pool<Postgres>,
}

impl ShutdownCoordinator {
    pub fn new(
        server_handle: ServerHandle,
        server_task: JoinHandle<Result<(), std::io::Error>>,
        pool: Pool<Postgres>,
    ) -> Self {
        Self {
            server_handle,
            server_task,
            pool,
        }
    }

    /// Block until SIGINT or SIGTERM arrives, then tear the application down
    pub async fn wait_for_shutdown(self) -> std::io::Result<()> {
        let signal_name = Self::shutdown_signal().await;
        info!("Received {signal_name}, shutting down gracefully");
        self.teardown().await
    }

    async fn shutdown_signal() -> &'static str {
        let ctrl_c = async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to install CTRL+C signal handler");
        };

        #[cfg(unix)]
        let terminate = async {
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
                .expect("Failed to install SIGTERM signal handler")
                .recv()
                .await;
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => "SIGINT",
            _ = terminate => "SIGTERM",
        }
    }

    async fn teardown(self) -> std::io::Result<()> {
        info!("Stopping HTTP server, draining in-flight requests");
        self.server_handle.stop(true).await;

        match self.server_task.await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => error!("HTTP server error during shutdown: {e:?}"),
            Err(e) => error!("HTTP server task panicked: {e:?}"),
        }

        self.pool.close().await;
        info!("Shutdown complete");
        Ok(())
    }
}
