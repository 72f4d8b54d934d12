//! JSON 清单声明的外部 mediator 模块
//!
//! 目录布局与插件目录一致：每个子目录包含一个 `mediators.json`。
//!
//! ```json
//! {
//!   "name": "acme.connectors",
//!   "version": "1.0.0",
//!   "mediators": [
//!     { "id": "AcmeCall", "name": "Acme Call", "icon": "images/AcmeCall.gif",
//!       "category": "endpoint", "parameters": [] }
//!   ]
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::mediator::{DescriptorSpec, MediatorDescriptor};
use crate::registry::{Declaration, MediatorModule, RegistryError};

pub const MANIFEST_FILE: &str = "mediators.json";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MediatorManifest {
    pub name: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// 逐条解码，单条格式错误不影响同一清单内的其他条目
    #[serde(default)]
    pub mediators: Vec<Value>,
}

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("manifest directory not found: {0}")]
    ManifestMissing(String),
    #[error("failed to parse manifest {path}: {message}")]
    ManifestParse { path: String, message: String },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Clone, Debug)]
pub struct ManifestModule {
    manifest: MediatorManifest,
    source: Option<PathBuf>,
}

impl ManifestModule {
    pub fn new(manifest: MediatorManifest) -> Self {
        Self {
            manifest,
            source: None,
        }
    }

    pub fn from_json(content: &str) -> Result<Self, ManifestError> {
        let manifest = serde_json::from_str(content).map_err(|err| ManifestError::ManifestParse {
            path: "<inline>".to_string(),
            message: err.to_string(),
        })?;
        Ok(Self::new(manifest))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let manifest = serde_json::from_str(&content).map_err(|err| ManifestError::ManifestParse {
            path: path.display().to_string(),
            message: err.to_string(),
        })?;
        tracing::debug!(manifest = %path.display(), "mediator manifest loaded");
        Ok(Self {
            manifest,
            source: Some(path.to_path_buf()),
        })
    }

    /// 加载目录下所有子目录的清单，按目录名排序以保证注册顺序稳定
    ///
    /// 单个清单读取或解析失败只影响它自己，以 [`UnloadableManifest`] 形式返回；
    /// 目录本身不存在时整个目录作为一条失败返回。
    pub fn load_directory(dir: impl AsRef<Path>) -> Vec<Result<Self, UnloadableManifest>> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            let err = ManifestError::ManifestMissing(dir.display().to_string());
            return vec![Err(UnloadableManifest::new(dir, &err))];
        }

        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(err) => return vec![Err(UnloadableManifest::new(dir, &ManifestError::from(err)))],
        };

        let mut manifest_paths = Vec::new();
        let mut failures: Vec<Result<Self, UnloadableManifest>> = Vec::new();
        for entry in entries {
            let path = match entry {
                Ok(entry) => entry.path(),
                Err(err) => {
                    failures.push(Err(UnloadableManifest::new(dir, &ManifestError::from(err))));
                    continue;
                }
            };
            if path.is_dir() {
                let manifest_path = path.join(MANIFEST_FILE);
                if manifest_path.exists() {
                    manifest_paths.push(manifest_path);
                }
            }
        }
        manifest_paths.sort();

        manifest_paths
            .iter()
            .map(|path| Self::load(path).map_err(|err| UnloadableManifest::new(path, &err)))
            .chain(failures)
            .collect()
    }

    pub fn manifest(&self) -> &MediatorManifest {
        &self.manifest
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

/// 无法加载的清单；作为只声明一条错误的模块参与注册，失败随注册报告上报
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnloadableManifest {
    path: String,
    reason: String,
}

impl UnloadableManifest {
    pub fn new(path: impl AsRef<Path>, error: &ManifestError) -> Self {
        Self {
            path: path.as_ref().display().to_string(),
            reason: error.to_string(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl MediatorModule for UnloadableManifest {
    fn name(&self) -> &str {
        &self.path
    }

    fn declare(&self) -> Vec<Declaration> {
        vec![Err(RegistryError::ModuleUnavailable {
            module: self.path.clone(),
            reason: self.reason.clone(),
        })]
    }
}

fn decode_entry(entry: &Value) -> Declaration {
    let id = entry
        .get("id")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let spec: DescriptorSpec = serde_json::from_value(entry.clone())
        .map_err(|err| RegistryError::invalid(id, err.to_string()))?;
    MediatorDescriptor::try_from(spec)
}

impl MediatorModule for ManifestModule {
    fn name(&self) -> &str {
        &self.manifest.name
    }

    fn declare(&self) -> Vec<Declaration> {
        self.manifest.mediators.iter().map(decode_entry).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn malformed_entry_does_not_hide_siblings() {
        let content = json!({
            "name": "acme",
            "version": "0.1.0",
            "mediators": [
                { "id": "AcmeCall", "name": "Acme Call", "icon": "a.gif", "category": "endpoint" },
                { "id": "Broken", "icon": "b.gif", "category": "endpoint" },
                { "id": "Routed", "name": "Routed", "icon": "c.gif", "category": "router" }
            ]
        })
        .to_string();
        let module = ManifestModule::from_json(&content).expect("parse");
        let declarations = module.declare();

        assert_eq!(declarations.len(), 3);
        assert!(declarations[0].is_ok());
        assert!(matches!(
            &declarations[1],
            Err(RegistryError::InvalidDescriptor { id, .. }) if id == "Broken"
        ));
        assert!(matches!(
            &declarations[2],
            Err(RegistryError::InvalidDescriptor { reason, .. }) if reason.contains("router")
        ));
    }

    #[test]
    fn missing_directory_is_reported() {
        let loaded = ManifestModule::load_directory("/definitely/not/here");
        assert_eq!(loaded.len(), 1);
        let failure = loaded[0].as_ref().unwrap_err();
        assert_eq!(failure.path(), "/definitely/not/here");
        assert!(failure.reason().contains("manifest directory not found"));
    }

    #[test]
    fn unloadable_manifest_declares_a_single_failure() {
        let err = ManifestError::ManifestParse {
            path: "plugins/bad/mediators.json".to_string(),
            message: "key must be a string".to_string(),
        };
        let module = UnloadableManifest::new("plugins/bad/mediators.json", &err);

        assert_eq!(module.name(), "plugins/bad/mediators.json");
        match &module.declare()[..] {
            [Err(RegistryError::ModuleUnavailable { module, reason })] => {
                assert_eq!(module, "plugins/bad/mediators.json");
                assert!(reason.contains("key must be a string"));
            }
            other => panic!("unexpected declarations {other:?}"),
        }
    }
}
