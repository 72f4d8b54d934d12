use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::registry::{MediatorQuery, RegistryError};
use crate::schema::SchemaError;

use super::document::{FlowDocument, FlowNode};
use super::error::FlowError;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiagnosticKind {
    UnknownMediator { mediator: String },
    /// 查询接口返回了 NotFound 以外的错误
    LookupFailed { mediator: String, message: String },
    InvalidProperties { message: String, path: Vec<String> },
    DuplicateNodeId,
    EmptyNodeId,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// 从根节点开始、以 `/` 连接的节点路径
    pub node: String,
    #[serde(flatten)]
    pub kind: DiagnosticKind,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DiagnosticKind::UnknownMediator { mediator } => {
                write!(f, "{}: unknown mediator id `{}`", self.node, mediator)
            }
            DiagnosticKind::LookupFailed { mediator, message } => {
                write!(f, "{}: lookup of `{}` failed: {}", self.node, mediator, message)
            }
            DiagnosticKind::InvalidProperties { message, path } if path.is_empty() => {
                write!(f, "{}: {}", self.node, message)
            }
            DiagnosticKind::InvalidProperties { message, path } => {
                write!(f, "{}: {} (at `{}`)", self.node, message, path.join("."))
            }
            DiagnosticKind::DuplicateNodeId => write!(f, "{}: duplicate node id", self.node),
            DiagnosticKind::EmptyNodeId => write!(f, "{}: node id is empty", self.node),
        }
    }
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct FlowReport {
    pub flow: String,
    pub nodes: usize,
    pub diagnostics: Vec<Diagnostic>,
}

impl FlowReport {
    pub fn is_ok(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn unknown_mediators(&self) -> impl Iterator<Item = &str> {
        self.diagnostics.iter().filter_map(|diagnostic| match &diagnostic.kind {
            DiagnosticKind::UnknownMediator { mediator } => Some(mediator.as_str()),
            _ => None,
        })
    }
}

/// 按注册表解析流程文档中的节点引用
pub struct FlowValidator<'a, Q: MediatorQuery + ?Sized> {
    query: &'a Q,
}

impl<'a, Q: MediatorQuery + ?Sized> FlowValidator<'a, Q> {
    pub fn new(query: &'a Q) -> Self {
        Self { query }
    }

    pub fn check(&self, document: &FlowDocument) -> FlowReport {
        let mut report = FlowReport {
            flow: document.name.clone(),
            nodes: 0,
            diagnostics: Vec::new(),
        };
        let mut seen = HashSet::new();
        self.check_nodes(&document.nodes, "", &mut seen, &mut report);
        report
    }

    fn check_nodes<'d>(
        &self,
        nodes: &'d [FlowNode],
        parent: &str,
        seen: &mut HashSet<&'d str>,
        report: &mut FlowReport,
    ) {
        for (position, node) in nodes.iter().enumerate() {
            report.nodes += 1;
            let label = if node.id.is_empty() {
                format!("#{position}")
            } else {
                node.id.clone()
            };
            let node_path = if parent.is_empty() {
                label
            } else {
                format!("{parent}/{label}")
            };

            if node.id.is_empty() {
                report.push(&node_path, DiagnosticKind::EmptyNodeId);
            } else if !seen.insert(node.id.as_str()) {
                report.push(&node_path, DiagnosticKind::DuplicateNodeId);
            }

            match self.query.lookup(&node.mediator) {
                Ok(descriptor) => {
                    if let Err(SchemaError::Validation { message, path }) =
                        descriptor.validate_properties(&node.properties)
                    {
                        report.push(&node_path, DiagnosticKind::InvalidProperties { message, path });
                    }
                }
                Err(RegistryError::NotFound(mediator)) => {
                    report.push(&node_path, DiagnosticKind::UnknownMediator { mediator });
                }
                Err(other) => {
                    report.push(
                        &node_path,
                        DiagnosticKind::LookupFailed {
                            mediator: node.mediator.clone(),
                            message: other.to_string(),
                        },
                    );
                }
            }

            self.check_nodes(&node.children, &node_path, seen, report);
        }
    }
}

impl FlowReport {
    fn push(&mut self, node: &str, kind: DiagnosticKind) {
        tracing::debug!(flow = %self.flow, node, ?kind, "flow diagnostic");
        self.diagnostics.push(Diagnostic {
            node: node.to_string(),
            kind,
        });
    }
}

/// 导入流程：解析并校验，存在任何诊断则拒绝导入
pub fn import_flow<Q: MediatorQuery + ?Sized>(
    query: &Q,
    content: &str,
) -> Result<FlowDocument, FlowError> {
    let document = FlowDocument::from_json(content)?;
    let report = FlowValidator::new(query).check(&document);
    if report.is_ok() {
        tracing::debug!(flow = %document.name, nodes = report.nodes, "flow imported");
        Ok(document)
    } else {
        tracing::warn!(
            flow = %report.flow,
            problems = report.diagnostics.len(),
            "flow import rejected"
        );
        Err(FlowError::Rejected(report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::mediator::{Category, MediatorDescriptor, Parameter};
    use crate::registry::MediatorRegistry;

    struct UnavailableQuery;

    impl MediatorQuery for UnavailableQuery {
        fn lookup(&self, _id: &str) -> Result<Arc<MediatorDescriptor>, RegistryError> {
            Err(RegistryError::ModuleUnavailable {
                module: "acme".to_string(),
                reason: "offline".to_string(),
            })
        }

        fn list_by_category(&self, _category: Category) -> Vec<Arc<MediatorDescriptor>> {
            Vec::new()
        }

        fn list_all(&self) -> Vec<Arc<MediatorDescriptor>> {
            Vec::new()
        }
    }

    fn registry() -> MediatorRegistry {
        let mut registry = MediatorRegistry::new();
        registry
            .register(
                MediatorDescriptor::builder("TryBlockMediator", "TryBlock Mediator", Category::FlowController)
                    .build(),
            )
            .expect("register try block");
        registry
            .register(
                MediatorDescriptor::builder("LogMediator", "Log Mediator", Category::Manipulator)
                    .parameter(Parameter::one_of("level", ["full", "simple"]).with_default("simple"))
                    .build(),
            )
            .expect("register log");
        registry
    }

    #[test]
    fn nested_unknown_mediator_reports_full_path() {
        let registry = registry();
        let document = FlowDocument::new("orders").with_node(
            FlowNode::new("try", "TryBlockMediator")
                .with_child(FlowNode::new("log", "LogMediator"))
                .with_child(FlowNode::new("call", "MissingMediator")),
        );

        let report = FlowValidator::new(&registry).check(&document);
        assert_eq!(report.nodes, 3);
        assert_eq!(
            report.diagnostics,
            vec![Diagnostic {
                node: "try/call".to_string(),
                kind: DiagnosticKind::UnknownMediator {
                    mediator: "MissingMediator".to_string()
                },
            }]
        );
        assert_eq!(
            report.diagnostics[0].to_string(),
            "try/call: unknown mediator id `MissingMediator`"
        );
    }

    #[test]
    fn duplicate_and_empty_ids_are_reported() {
        let registry = registry();
        let document = FlowDocument::new("dupes")
            .with_node(FlowNode::new("a", "LogMediator"))
            .with_node(FlowNode::new("a", "LogMediator"))
            .with_node(FlowNode::new("", "LogMediator"));

        let report = FlowValidator::new(&registry).check(&document);
        let kinds: Vec<_> = report.diagnostics.iter().map(|d| d.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![DiagnosticKind::DuplicateNodeId, DiagnosticKind::EmptyNodeId]
        );
        assert_eq!(report.diagnostics[1].node, "#2");
    }

    #[test]
    fn invalid_property_carries_path() {
        let registry = registry();
        let document = FlowDocument::new("props")
            .with_node(FlowNode::new("log", "LogMediator").with_property("level", "loud"));

        let report = FlowValidator::new(&registry).check(&document);
        match &report.diagnostics[..] {
            [Diagnostic {
                kind: DiagnosticKind::InvalidProperties { path, .. },
                ..
            }] => assert_eq!(path, &vec!["level".to_string()]),
            other => panic!("unexpected diagnostics {other:?}"),
        }
    }

    #[test]
    fn lookup_error_is_not_reported_as_property_problem() {
        let document = FlowDocument::new("remote").with_node(FlowNode::new("call", "AcmeCall"));

        let report = FlowValidator::new(&UnavailableQuery).check(&document);
        match &report.diagnostics[..] {
            [Diagnostic {
                kind: DiagnosticKind::LookupFailed { mediator, message },
                ..
            }] => {
                assert_eq!(mediator, "AcmeCall");
                assert!(message.contains("offline"));
            }
            other => panic!("unexpected diagnostics {other:?}"),
        }
        assert_eq!(report.unknown_mediators().count(), 0);
    }
}
