//! Required top-level key classification

use crate::core::document::Node;
use crate::validation::report::sort_details;
use tracing::debug;

/// Outcome of checking a mapping against a required key set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyFindings {
    /// Required keys absent from the mapping, sorted case-insensitively
    pub missing: Vec<String>,

    /// Required keys present with a null value, sorted case-insensitively
    pub empty: Vec<String>,
}

impl KeyFindings {
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.empty.is_empty()
    }
}

/// Classify each required key as missing, empty or satisfied
pub fn find_missing_and_empty<S: AsRef<str>>(mapping: &Node, required_keys: &[S]) -> KeyFindings {
    let mut missing = Vec::new();
    let mut empty = Vec::new();

    for key in required_keys {
        let key = key.as_ref();
        match mapping.get(key) {
            Node::Missing => missing.push(key),
            Node::Null => empty.push(key),
            _ => {}
        }
    }

    let findings = KeyFindings {
        missing: sort_details(missing),
        empty: sort_details(empty),
    };
    debug!(
        "Required keys: {} missing, {} empty",
        findings.missing.len(),
        findings.empty.len()
    );
    findings
}
