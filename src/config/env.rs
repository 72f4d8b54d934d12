use std::env;
use std::path::PathBuf;

pub const MANIFEST_DIRS_VAR: &str = "MEDIAFLOW_MANIFEST_DIRS";
pub const DEBUG_VAR: &str = "MEDIAFLOW_DEBUG";
pub const CONFIG_VAR: &str = "MEDIAFLOW_CONFIG";

/// 环境变量配置
pub struct EnvConfig;

impl EnvConfig {
    /// 获取可选的环境变量，空字符串视为未设置
    pub fn get_env_optional(key: &str) -> Option<String> {
        env::var(key).ok().filter(|value| !value.trim().is_empty())
    }

    /// 额外的清单目录，使用平台路径分隔符（Unix 为 `:`）
    pub fn manifest_dirs() -> Vec<PathBuf> {
        env::var_os(MANIFEST_DIRS_VAR)
            .map(|raw| {
                env::split_paths(&raw)
                    .filter(|path| !path.as_os_str().is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn config_path() -> Option<PathBuf> {
        Self::get_env_optional(CONFIG_VAR).map(PathBuf::from)
    }

    /// 检查是否启用调试模式
    pub fn is_debug_mode() -> bool {
        env::var(DEBUG_VAR).is_ok()
    }
}
