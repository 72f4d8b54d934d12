use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::env::EnvConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {message}")]
    Parse { path: String, message: String },
}

/// 注册表启动配置（`mediaflow.json`）
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub manifest_dirs: Vec<PathBuf>,
    #[serde(default = "RegistryConfig::default_builtins")]
    pub builtins: bool,
    /// 任一描述符注册失败即视为启动失败
    #[serde(default)]
    pub strict: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            manifest_dirs: Vec::new(),
            builtins: true,
            strict: false,
        }
    }
}

impl RegistryConfig {
    fn default_builtins() -> bool {
        true
    }

    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(content).map_err(|err| ConfigError::Parse {
            path: "<inline>".to_string(),
            message: err.to_string(),
        })
    }

    /// 读取配置文件，相对清单目录按配置文件所在目录解析
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let mut config: Self = serde_json::from_str(&content).map_err(|err| ConfigError::Parse {
            path: path.display().to_string(),
            message: err.to_string(),
        })?;

        if let Some(base) = path.parent() {
            for dir in &mut config.manifest_dirs {
                if dir.is_relative() {
                    *dir = base.join(&*dir);
                }
            }
        }
        Ok(config)
    }

    /// `MEDIAFLOW_CONFIG` 指向的文件（未设置则使用默认值），再叠加环境变量里的清单目录
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = match EnvConfig::config_path() {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        Ok(config.with_env_overrides())
    }

    pub fn with_env_overrides(mut self) -> Self {
        for dir in EnvConfig::manifest_dirs() {
            if !self.manifest_dirs.contains(&dir) {
                self.manifest_dirs.push(dir);
            }
        }
        self
    }
}
