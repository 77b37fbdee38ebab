use serde::Deserialize;
use serde_yaml::Value;

use crate::error::ConvertError;
use crate::model::Resource;

/// Every document of a multi-document YAML stream, in order. Empty
/// documents between separators are kept as `None`.
#[derive(Debug, Default)]
pub struct Bundle {
    documents: Vec<Option<Value>>,
}

impl Bundle {
    pub fn parse(text: &str) -> Result<Self, ConvertError> {
        let documents = serde_yaml::Deserializer::from_str(text)
            .map(|doc| {
                let value = Value::deserialize(doc).map_err(ConvertError::BundleParse)?;
                Ok((!value.is_null()).then_some(value))
            })
            .collect::<Result<Vec<_>, ConvertError>>()?;
        Ok(Self { documents })
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    pub fn empty_documents(&self) -> usize {
        self.documents.iter().filter(|d| d.is_none()).count()
    }

    /// Validates every non-empty document; fails on the first malformed one.
    pub fn into_resources(self) -> Result<Vec<Resource>, ConvertError> {
        self.documents
            .into_iter()
            .enumerate()
            .filter_map(|(index, doc)| match doc {
                Some(doc) => Some(Resource::from_document(index, doc)),
                None => {
                    tracing::debug!(index, "Skipping empty document");
                    None
                }
            })
            .collect()
    }
}
