use std::path::Path;

use crate::config::RegistryConfig;
use crate::error::{MediaFlowError, Result};
use crate::manifest::ManifestModule;
use crate::mediator::{builtin, MediatorDescriptor};

use super::catalog::MediatorCatalog;
use super::error::RegistryError;
use super::registry::MediatorRegistry;

/// 模块声明的一条描述符；解码失败的条目以错误形式交给注册流程统一上报
pub type Declaration = std::result::Result<MediatorDescriptor, RegistryError>;

/// 向注册表声明 mediator 的模块（内置模块或清单插件）
pub trait MediatorModule: Send + Sync {
    fn name(&self) -> &str;

    fn declare(&self) -> Vec<Declaration>;
}

#[derive(Clone, Debug)]
pub struct RegistrationFailure {
    pub module: String,
    pub error: RegistryError,
}

/// 启动注册结果
#[derive(Clone, Debug, Default)]
pub struct RegistrationReport {
    pub registered: Vec<String>,
    pub failures: Vec<RegistrationFailure>,
}

impl RegistrationReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// 存在失败条目的模块名，去重并保持顺序
    pub fn failed_modules(&self) -> Vec<&str> {
        let mut modules: Vec<&str> = Vec::new();
        for failure in &self.failures {
            if !modules.contains(&failure.module.as_str()) {
                modules.push(failure.module.as_str());
            }
        }
        modules
    }

    fn merge(&mut self, other: RegistrationReport) {
        self.registered.extend(other.registered);
        self.failures.extend(other.failures);
    }
}

/// 依次注册各模块的描述符；单个条目失败只记录并跳过，不影响其他条目
pub fn register_modules(
    registry: &mut MediatorRegistry,
    modules: &[Box<dyn MediatorModule>],
) -> RegistrationReport {
    let mut report = RegistrationReport::default();
    for module in modules {
        report.merge(register_module(registry, module.as_ref()));
    }
    report
}

pub fn register_module(
    registry: &mut MediatorRegistry,
    module: &dyn MediatorModule,
) -> RegistrationReport {
    let mut report = RegistrationReport::default();
    for declaration in module.declare() {
        match declaration.and_then(|descriptor| registry.register(descriptor)) {
            Ok(descriptor) => report.registered.push(descriptor.id.clone()),
            Err(error) => {
                if matches!(error, RegistryError::RegistryClosed(_)) {
                    tracing::error!(
                        module = module.name(),
                        mediator = error.mediator_id(),
                        "registration attempted after seal"
                    );
                } else {
                    tracing::warn!(
                        module = module.name(),
                        mediator = error.mediator_id(),
                        error = %error,
                        "mediator skipped"
                    );
                }
                report.failures.push(RegistrationFailure {
                    module: module.name().to_string(),
                    error,
                });
            }
        }
    }
    report
}

/// 应用启动序列：收集模块、注册、seal
pub struct Bootstrap {
    modules: Vec<Box<dyn MediatorModule>>,
    strict: bool,
}

impl Default for Bootstrap {
    fn default() -> Self {
        Self::new()
    }
}

impl Bootstrap {
    pub fn new() -> Self {
        Self {
            modules: Vec::new(),
            strict: false,
        }
    }

    pub fn from_config(config: &RegistryConfig) -> Self {
        let mut bootstrap = Self::new().strict(config.strict);
        if config.builtins {
            bootstrap = bootstrap.with_builtins();
        }
        for dir in &config.manifest_dirs {
            bootstrap = bootstrap.with_manifest_dir(dir);
        }
        bootstrap
    }

    pub fn with_builtins(mut self) -> Self {
        for module in builtin::modules() {
            self.modules.push(Box::new(module));
        }
        self
    }

    pub fn with_module(mut self, module: impl MediatorModule + 'static) -> Self {
        self.modules.push(Box::new(module));
        self
    }

    /// 加载失败的清单同样作为模块加入，注册时以 warn 记入报告，严格模式下让启动失败
    pub fn with_manifest_dir(mut self, dir: impl AsRef<Path>) -> Self {
        for loaded in ManifestModule::load_directory(dir) {
            match loaded {
                Ok(module) => self.modules.push(Box::new(module)),
                Err(unloadable) => {
                    tracing::debug!(
                        manifest = unloadable.path(),
                        reason = unloadable.reason(),
                        "mediator manifest could not be loaded"
                    );
                    self.modules.push(Box::new(unloadable));
                }
            }
        }
        self
    }

    /// 严格模式下任一条目失败都会让启动失败（仍会先尝试全部条目）
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn populate(&self, registry: &mut MediatorRegistry) -> RegistrationReport {
        register_modules(registry, &self.modules)
    }

    pub fn run(self) -> Result<(MediatorCatalog, RegistrationReport)> {
        let mut registry = MediatorRegistry::new();
        let report = self.populate(&mut registry);
        let catalog = registry.seal();

        tracing::info!(
            modules = self.modules.len(),
            registered = report.registered.len(),
            failed = report.failures.len(),
            "mediator bootstrap complete"
        );

        if self.strict && !report.is_clean() {
            return Err(MediaFlowError::Bootstrap {
                failures: report.failures.len(),
            });
        }
        Ok((catalog, report))
    }
}
