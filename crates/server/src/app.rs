use crate::{
    auth::{AuthConfig, JwtManager},
    router::AppRouter,
    services::Services,
};
use anyhow::Context;
use axum::serve;
use database::{Database, InMemoryDatabase};
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tokio::signal;
use tracing::{info, warn};
use utils::{AppConfig, StorageBackend};

pub struct ApplicationServer;

impl ApplicationServer {
    pub async fn serve(config: Arc<AppConfig>) -> anyhow::Result<()> {
        // 日志在 billbook/src/main.rs 中初始化

        let tcp_listener = tokio::net::TcpListener::bind(config.bind_address())
            .await
            .context("🔴 Failed to bind TCP listener")?;

        let local_addr = tcp_listener.local_addr().context("🔴 Failed to get local address")?;

        let services = Self::build_services(config.clone()).await?;
        let jwt_manager = Arc::new(JwtManager::new(AuthConfig::from(config.as_ref())));
        let router = AppRouter::new(services, jwt_manager, Duration::from_secs(config.http_timeout_secs));

        info!("🟢 server:billbook has launched on {local_addr} 🚀");

        serve(tcp_listener, router.into_make_service_with_connect_info::<SocketAddr>())
            .with_graceful_shutdown(Self::shutdown_signal())
            .await
            .context("🔴 Failed to start server")?;

        Ok(())
    }

    async fn build_services(config: Arc<AppConfig>) -> anyhow::Result<Services> {
        match config.storage_backend {
            StorageBackend::Mongo => {
                let db = Database::new(config.clone())
                    .await
                    .context("🔴 Failed to connect to MongoDB")?;

                if let Err(e) = db.init_indexes().await {
                    warn!("⚠️ 数据库索引初始化失败，继续启动: {}", e);
                }

                Ok(Services::new(db))
            }
            StorageBackend::Memory => {
                warn!("⚠️ 使用内存存储，进程退出后数据丢失");
                Ok(Services::new(InMemoryDatabase::new()))
            }
        }
    }

    async fn shutdown_signal() {
        let ctrl_c = async {
            if let Err(e) = signal::ctrl_c().await {
                warn!("🔴 Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        };

        #[cfg(unix)]
        let terminate = async {
            match signal::unix::signal(signal::unix::SignalKind::terminate()) {
                Ok(mut sig) => {
                    sig.recv().await;
                }
                Err(e) => {
                    warn!("🔴 Failed to install signal handler: {}", e);
                    std::future::pending::<()>().await;
                }
            }
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => {},
            _ = terminate => {},
        }

        warn!("❌ Signal received, starting graceful shutdown...");
    }
}
