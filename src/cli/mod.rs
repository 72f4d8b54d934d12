use std::path::Path;

use serde::Serialize;

use crate::config::RegistryConfig;
use crate::error::Result;
use crate::mediator::MediatorDescriptor;
use crate::registry::{Bootstrap, MediatorCatalog, MediatorQuery, RegistrationReport};
use crate::schema::Schema;

#[derive(Clone, Debug, Serialize)]
pub struct CatalogExportEntry {
    #[serde(flatten)]
    pub descriptor: MediatorDescriptor,
    pub schema: Schema,
}

/// 加载配置并完成启动注册；未指定配置文件时读取环境变量
pub fn load_catalog(config: Option<&Path>) -> Result<(MediatorCatalog, RegistrationReport)> {
    let config = match config {
        Some(path) => RegistryConfig::load(path)?.with_env_overrides(),
        None => RegistryConfig::from_env()?,
    };
    Bootstrap::from_config(&config).run()
}

pub fn catalog_exports<Q: MediatorQuery + ?Sized>(query: &Q) -> Vec<CatalogExportEntry> {
    query
        .list_all()
        .into_iter()
        .map(|descriptor| CatalogExportEntry {
            schema: descriptor.parameter_schema(),
            descriptor: (*descriptor).clone(),
        })
        .collect()
}
