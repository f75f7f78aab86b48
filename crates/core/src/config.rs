//! 应用配置
//!
//! 配置来源优先级：命令行指定的TOML文件 > 默认路径下的TOML文件 > 内置默认值，
//! 环境变量（`COURIER_`前缀）最终覆盖以上所有来源。

use anyhow::{Context, Result};
use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub storage: StorageConfig,
    pub dispatcher: DispatcherConfig,
    pub observability: ObservabilityConfig,
}

/// API服务配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub bind_address: String,
    pub cors_enabled: bool,
    pub request_timeout_seconds: u64,
}

/// 存储配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// 集合文档所在的数据目录
    pub data_dir: String,
}

/// 调度配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatcherConfig {
    /// 活动日志保留的最大条数
    pub activity_log_capacity: usize,
}

/// 可观测性配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                bind_address: "0.0.0.0:8080".to_string(),
                cors_enabled: true,
                request_timeout_seconds: 30,
            },
            storage: StorageConfig {
                data_dir: "data".to_string(),
            },
            dispatcher: DispatcherConfig {
                activity_log_capacity: 5,
            },
            observability: ObservabilityConfig {
                log_level: "info".to_string(),
            },
        }
    }
}

impl AppConfig {
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut builder = ConfigBuilder::builder();

        if let Some(path) = config_path {
            if Path::new(path).exists() {
                builder = builder.add_source(File::new(path, FileFormat::Toml));
            } else {
                return Err(anyhow::anyhow!("配置文件不存在: {}", path));
            }
        } else {
            let default_paths = [
                "config/courier.toml",
                "courier.toml",
                "/etc/courier/config.toml",
            ];

            let mut config_file_found = false;
            for path in &default_paths {
                if Path::new(path).exists() {
                    builder = builder.add_source(File::new(path, FileFormat::Toml));
                    config_file_found = true;
                    break;
                }
            }

            if !config_file_found {
                builder = builder
                    .set_default("api.bind_address", "0.0.0.0:8080")?
                    .set_default("api.cors_enabled", true)?
                    .set_default("api.request_timeout_seconds", 30)?
                    .set_default("storage.data_dir", "data")?
                    .set_default("dispatcher.activity_log_capacity", 5)?
                    .set_default("observability.log_level", "info")?;
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("COURIER")
                .separator("_")
                .try_parsing(true),
        );

        let config: AppConfig = builder
            .build()
            .context("构建配置失败")?
            .try_deserialize()
            .context("反序列化配置失败")?;

        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.api.bind_address.parse::<std::net::SocketAddr>().is_err() {
            return Err(anyhow::anyhow!(
                "无效的监听地址: {}",
                self.api.bind_address
            ));
        }
        if self.storage.data_dir.trim().is_empty() {
            return Err(anyhow::anyhow!("数据目录不能为空"));
        }
        if self.dispatcher.activity_log_capacity == 0 {
            return Err(anyhow::anyhow!("活动日志容量必须大于0"));
        }
        Ok(())
    }
}
