//! Parsed descriptor document and its loader.
//!
//! The YAML tree is converted into [`Node`] so that "key absent" and "key
//! present with a null value" stay distinguishable after parsing.

use crate::core::error::{ValidatorError, ValidatorResult};
use serde_yaml::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

static MISSING: Node = Node::Missing;

/// Scalar leaf of a descriptor
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Bool(bool),
    /// Numbers keep their textual form; nothing in a descriptor does arithmetic
    Number(String),
    String(String),
}

impl Scalar {
    pub fn as_text(&self) -> String {
        match self {
            Scalar::Bool(b) => b.to_string(),
            Scalar::Number(n) => n.clone(),
            Scalar::String(s) => s.clone(),
        }
    }
}

/// One value in the parsed descriptor.
///
/// `Missing` is never produced by the parser. It is what [`Node::get`] hands
/// back for a key that does not exist, so callers can match on absence the
/// same way they match on null.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Entries in document order
    Mapping(Vec<(String, Node)>),
    Sequence(Vec<Node>),
    Scalar(Scalar),
    Null,
    Missing,
}

impl Node {
    /// Look up a key; anything that is not a mapping has no keys
    pub fn get(&self, key: &str) -> &Node {
        match self {
            Node::Mapping(entries) => entries
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v)
                .unwrap_or(&MISSING),
            _ => &MISSING,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Node::Missing)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Node::Null)
    }

    /// Present and not null
    pub fn has_value(&self) -> bool {
        !matches!(self, Node::Null | Node::Missing)
    }

    pub fn as_sequence(&self) -> Option<&[Node]> {
        match self {
            Node::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Textual form of a scalar; `None` for containers, null and missing
    pub fn as_text(&self) -> Option<String> {
        match self {
            Node::Scalar(s) => Some(s.as_text()),
            _ => None,
        }
    }

    pub fn is_true(&self) -> bool {
        matches!(self, Node::Scalar(Scalar::Bool(true)))
    }
}

fn key_text(key: &Value) -> Option<String> {
    match key {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Null => Some("~".to_string()),
        Value::Tagged(tagged) => key_text(&tagged.value),
        Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Node::Null,
            Value::Bool(b) => Node::Scalar(Scalar::Bool(b)),
            Value::Number(n) => Node::Scalar(Scalar::Number(n.to_string())),
            Value::String(s) => Node::Scalar(Scalar::String(s)),
            Value::Sequence(items) => Node::Sequence(items.into_iter().map(Node::from).collect()),
            // Complex keys cannot name a descriptor field, so they are dropped
            Value::Mapping(map) => Node::Mapping(
                map.into_iter()
                    .filter_map(|(k, v)| key_text(&k).map(|k| (k, Node::from(v))))
                    .collect(),
            ),
            Value::Tagged(tagged) => Node::from(tagged.value),
        }
    }
}

/// A parsed descriptor whose root is a mapping
#[derive(Debug, Clone)]
pub struct Document {
    root: Node,
}

impl Document {
    /// Parse descriptor text. `path` is only used for error messages.
    pub fn parse(text: &str, path: &Path) -> ValidatorResult<Self> {
        let value: Value = serde_yaml::from_str(text).map_err(|e| ValidatorError::Syntax {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        match Node::from(value) {
            root @ Node::Mapping(_) => Ok(Self { root }),
            _ => Err(ValidatorError::Syntax {
                path: path.to_path_buf(),
                message: "the document root must be a mapping of keys".to_string(),
            }),
        }
    }

    pub fn get(&self, key: &str) -> &Node {
        self.root.get(key)
    }

    pub fn root(&self) -> &Node {
        &self.root
    }
}

/// Read and parse a descriptor, failing on an empty file or invalid YAML.
///
/// Nothing is cached: every caller gets a fresh parse of the file as it is on
/// disk at the time of the call.
pub fn load_or_fail(path: &Path) -> ValidatorResult<Document> {
    let metadata = fs::metadata(path).map_err(|e| ValidatorError::io(path, e))?;
    if metadata.len() == 0 {
        return Err(ValidatorError::EmptyInput {
            path: path.to_path_buf(),
        });
    }

    let text = fs::read_to_string(path).map_err(|e| ValidatorError::io(path, e))?;
    let document = Document::parse(&text, path)?;
    debug!("Loaded descriptor {}", path.display());
    Ok(document)
}
