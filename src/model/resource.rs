use std::path::{Path, PathBuf};

use serde_yaml::Value;

use crate::error::ConvertError;

/// Stands in for the install-time namespace; rendered by Helm, not by us.
pub const NAMESPACE_PLACEHOLDER: &str = "{{ .Release.Namespace }}";

pub const CRD_KIND: &str = "CustomResourceDefinition";
pub const CLUSTER_ROLE_BINDING_KIND: &str = "ClusterRoleBinding";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    Template,
    Crd,
}

impl std::fmt::Display for OutputKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Template => write!(f, "template"),
            Self::Crd => write!(f, "crd"),
        }
    }
}

/// A single manifest from the bundle, checked to carry `kind` and `metadata`.
#[derive(Debug, Clone)]
pub struct Resource {
    index: usize,
    kind: String,
    document: Value,
}

impl Resource {
    /// `index` is the document's position in the bundle stream, used in errors.
    pub fn from_document(index: usize, document: Value) -> Result<Self, ConvertError> {
        let kind = document
            .get("kind")
            .and_then(Value::as_str)
            .ok_or(ConvertError::MissingField {
                index,
                field: "kind",
            })?
            .to_string();

        if !document.get("metadata").is_some_and(Value::is_mapping) {
            return Err(ConvertError::MissingField {
                index,
                field: "metadata",
            });
        }

        Ok(Self {
            index,
            kind,
            document,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn document(&self) -> &Value {
        &self.document
    }

    pub fn output_kind(&self) -> OutputKind {
        if self.kind == CRD_KIND {
            OutputKind::Crd
        } else {
            OutputKind::Template
        }
    }

    /// CRDs are named after `metadata.name`, everything else after its kind.
    pub fn file_name(&self) -> Result<String, ConvertError> {
        let stem = match self.output_kind() {
            OutputKind::Crd => self
                .document
                .get("metadata")
                .and_then(|m| m.get("name"))
                .and_then(Value::as_str)
                .ok_or(ConvertError::MissingField {
                    index: self.index,
                    field: "metadata.name",
                })?,
            OutputKind::Template => self.kind.as_str(),
        };
        Ok(format!("{}.yaml", stem.to_lowercase()))
    }

    pub fn destination(&self, templates_dir: &Path, crds_dir: &Path) -> Result<PathBuf, ConvertError> {
        let dir = match self.output_kind() {
            OutputKind::Crd => crds_dir,
            OutputKind::Template => templates_dir,
        };
        Ok(dir.join(self.file_name()?))
    }

    /// Replace `metadata.namespace` (when present) and, for a
    /// ClusterRoleBinding, the first subject's namespace with the placeholder.
    pub fn templatize_namespace(&mut self) -> Result<(), ConvertError> {
        if let Some(namespace) = self
            .document
            .get_mut("metadata")
            .and_then(|m| m.get_mut("namespace"))
        {
            *namespace = Value::String(NAMESPACE_PLACEHOLDER.to_string());
        }

        if self.kind == CLUSTER_ROLE_BINDING_KIND {
            let subject = self
                .document
                .get_mut("subjects")
                .and_then(|s| s.get_mut(0))
                .and_then(Value::as_mapping_mut)
                .ok_or(ConvertError::MissingSubject { index: self.index })?;
            subject.insert(
                Value::String("namespace".to_string()),
                Value::String(NAMESPACE_PLACEHOLDER.to_string()),
            );
        }
        Ok(())
    }

    pub fn to_yaml(&self) -> Result<String, ConvertError> {
        serde_yaml::to_string(self.document()).map_err(|source| ConvertError::DocumentSerialize {
            index: self.index,
            source,
        })
    }
}
