//! 配置服务
//!
//! 配置保存在 `<config_dir>/gateway-console/config.toml`，文件不存在时使用默认值。
//! 所有字段都有默认值，配置文件只需写出需要覆盖的部分。

use std::path::{Path, PathBuf};
use std::time::Duration;

use gateway_console_core::CommandPolicy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::view::theme::Theme;

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid config value: {0}")]
    Invalid(String),
}

/// 应用配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 界面语言（BCP 47）
    pub language: String,
    pub theme: Theme,
    pub gateway: GatewaySettings,
    pub simulator: SimulatorSettings,
    pub log: LogSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            language: "en-US".to_string(),
            theme: Theme::Dark,
            gateway: GatewaySettings::default(),
            simulator: SimulatorSettings::default(),
            log: LogSettings::default(),
        }
    }
}

impl AppConfig {
    /// 校验取值范围
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gateway.timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "gateway.timeout_ms must be greater than 0".to_string(),
            ));
        }
        if self.gateway.base_delay_ms > self.gateway.max_delay_ms {
            return Err(ConfigError::Invalid(
                "gateway.base_delay_ms must not exceed gateway.max_delay_ms".to_string(),
            ));
        }
        if self.simulator.port_count == 0 {
            return Err(ConfigError::Invalid(
                "simulator.port_count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// 网关调用策略
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewaySettings {
    pub timeout_ms: u64,
    pub max_retries: u32,
    pub base_delay_ms: u64,
    pub max_delay_ms: u64,
}

impl Default for GatewaySettings {
    fn default() -> Self {
        let policy = CommandPolicy::default();
        Self {
            timeout_ms: duration_ms(policy.timeout),
            max_retries: policy.max_retries,
            base_delay_ms: duration_ms(policy.base_delay),
            max_delay_ms: duration_ms(policy.max_delay),
        }
    }
}

impl GatewaySettings {
    /// 转换为核心库的调用策略
    pub fn policy(&self) -> CommandPolicy {
        CommandPolicy {
            timeout: Duration::from_millis(self.timeout_ms),
            max_retries: self.max_retries,
            base_delay: Duration::from_millis(self.base_delay_ms),
            max_delay: Duration::from_millis(self.max_delay_ms),
        }
    }
}

fn duration_ms(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

/// 模拟网关参数
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorSettings {
    /// 网关显示名称
    pub name: String,
    /// 每次调用的基础延迟
    pub latency_ms: u64,
    /// 模拟的端口数量
    pub port_count: usize,
    /// 这些端口的操作总是失败（用于演示部分失败）
    pub failing_ports: Vec<String>,
}

impl Default for SimulatorSettings {
    fn default() -> Self {
        Self {
            name: "GW-32".to_string(),
            latency_ms: 400,
            port_count: 16,
            failing_ports: vec!["M7".to_string()],
        }
    }
}

/// 日志参数
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// tracing `EnvFilter` 语法，`RUST_LOG` 优先
    pub level: String,
    /// 日志目录，未设置时使用系统数据目录
    pub directory: Option<PathBuf>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
        }
    }
}

impl LogSettings {
    /// 实际使用的日志目录
    pub fn resolved_directory(&self) -> PathBuf {
        self.directory.clone().unwrap_or_else(|| {
            dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("gateway-console")
                .join("logs")
        })
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig, ConfigError>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<(), ConfigError>;
}

/// TOML 文件配置服务
pub struct TomlConfigService {
    path: PathBuf,
}

impl TomlConfigService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 默认配置文件路径
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("gateway-console")
            .join("config.toml")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> ConfigError {
        ConfigError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl Default for TomlConfigService {
    fn default() -> Self {
        Self::new(Self::default_path())
    }
}

impl ConfigService for TomlConfigService {
    fn load(&self) -> Result<AppConfig, ConfigError> {
        if !self.path.exists() {
            log::info!(
                "Config file {} not found, using defaults",
                self.path.display()
            );
            return Ok(AppConfig::default());
        }

        let content = std::fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        let config: AppConfig = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        config.validate()?;
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir).map_err(|e| self.io_error(e))?;
        }
        let content = toml::to_string_pretty(config)?;
        std::fs::write(&self.path, content).map_err(|e| self.io_error(e))?;
        log::debug!("Config saved to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service_in(dir: &tempfile::TempDir) -> TomlConfigService {
        TomlConfigService::new(dir.path().join("nested").join("config.toml"))
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = service_in(&dir).load().unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn saved_settings_are_loaded_back() {
        let dir = tempfile::tempdir().unwrap();
        let service = service_in(&dir);

        let mut config = AppConfig::default();
        config.language = "zh-CN".to_string();
        config.theme = Theme::Light;
        config.simulator.failing_ports = vec!["M2".to_string(), "M5".to_string()];
        service.save(&config).unwrap();

        assert!(service.path().exists());
        assert_eq!(service.load().unwrap(), config);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let service = service_in(&dir);
        std::fs::create_dir_all(service.path().parent().unwrap()).unwrap();
        std::fs::write(service.path(), "theme = \"light\"\n[gateway]\ntimeout_ms = 3000\n").unwrap();

        let config = service.load().unwrap();
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.gateway.policy().timeout, Duration::from_secs(3));
        assert_eq!(config.gateway.max_retries, GatewaySettings::default().max_retries);
        assert_eq!(config.simulator, SimulatorSettings::default());
    }

    #[test]
    fn malformed_or_out_of_range_values_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let service = service_in(&dir);
        std::fs::create_dir_all(service.path().parent().unwrap()).unwrap();

        std::fs::write(service.path(), "theme = 3").unwrap();
        assert!(matches!(service.load(), Err(ConfigError::Parse { .. })));

        std::fs::write(service.path(), "[gateway]\ntimeout_ms = 0\n").unwrap();
        assert!(matches!(service.load(), Err(ConfigError::Invalid(_))));
    }
}
