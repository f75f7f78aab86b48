use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::{net::TcpListener, sync::broadcast};
use tracing::{error, info};

use courier_api::{create_app, AppState};
use courier_core::AppConfig;
use courier_dispatcher::{ActivityLog, DispatchEngine};
use courier_infrastructure::{
    JsonCarrierRepository, JsonDistrictRepository, JsonShipmentRepository, JsonStore,
};

/// 主应用程序
pub struct Application {
    config: AppConfig,
    state: AppState,
}

impl Application {
    /// 创建新的应用实例
    pub async fn new(config: AppConfig) -> Result<Self> {
        info!("初始化应用程序，数据目录: {}", config.storage.data_dir);

        // 打开集合存储
        let store = JsonStore::open(&config.storage.data_dir)
            .await
            .with_context(|| format!("打开数据目录失败: {}", config.storage.data_dir))?;

        // 创建Repository实例
        let carrier_repo = Arc::new(
            JsonCarrierRepository::new(store.clone())
                .await
                .context("载入司机集合失败")?,
        );
        let shipment_repo = Arc::new(
            JsonShipmentRepository::new(store.clone())
                .await
                .context("载入运单集合失败")?,
        );
        let district_repo = Arc::new(
            JsonDistrictRepository::new(store)
                .await
                .context("载入片区集合失败")?,
        );

        // 创建活动日志与调度引擎
        let activity = Arc::new(ActivityLog::new(config.dispatcher.activity_log_capacity));
        let engine = Arc::new(DispatchEngine::new(
            carrier_repo.clone(),
            shipment_repo.clone(),
            Arc::clone(&activity),
        ));

        let state = AppState {
            carrier_repo,
            shipment_repo,
            district_repo,
            engine,
            activity,
        };

        Ok(Self { config, state })
    }

    /// 运行API服务器直到收到关闭信号
    pub async fn run(&self, mut shutdown_rx: broadcast::Receiver<()>) -> Result<()> {
        info!("启动API服务器: {}", self.config.api.bind_address);

        let app = create_app(self.state.clone(), self.config.api.cors_enabled);

        let listener = TcpListener::bind(&self.config.api.bind_address)
            .await
            .with_context(|| format!("绑定地址失败: {}", self.config.api.bind_address))?;

        info!("API服务器启动在 http://{}", self.config.api.bind_address);

        let server_handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app.into_make_service()).await {
                error!("API服务器运行失败: {}", e);
            }
        });

        // 等待关闭信号
        let _ = shutdown_rx.recv().await;
        info!("API服务器收到关闭信号");

        server_handle.abort();

        info!("API服务器已停止");
        Ok(())
    }
}
