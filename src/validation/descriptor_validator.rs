//! Descriptor validation run

use crate::core::config::ValidatorConfig;
use crate::core::document::{load_or_fail, Document};
use crate::core::error::ValidatorResult;
use crate::validation::categories;
use crate::validation::content_checks::{default_content_checks, ContentCheck};
use crate::validation::inventory;
use crate::validation::preprocess;
use crate::validation::report::Report;
use crate::validation::schema::{find_missing_and_empty, KeyFindings};
use crate::validation::variants::{AttributeFile, VariantChecker};
use std::fs;
use tracing::{debug, info, warn};

/// Runs every descriptor check against one repository
pub struct DescriptorValidator {
    config: ValidatorConfig,

    /// Checks applied to each cleaned attribute file
    content_checks: Vec<Box<dyn ContentCheck>>,
}

impl DescriptorValidator {
    /// Create a validator with the default content checks
    pub fn new(config: ValidatorConfig) -> Self {
        Self::with_content_checks(config, default_content_checks())
    }

    /// Create a validator with custom content checks
    pub fn with_content_checks(
        config: ValidatorConfig,
        content_checks: Vec<Box<dyn ContentCheck>>,
    ) -> Self {
        Self {
            config,
            content_checks,
        }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Load the descriptor, failing on empty or unparseable input
    pub fn load(&self) -> ValidatorResult<Document> {
        load_or_fail(&self.config.descriptor_path)
    }

    /// Classify the required top-level keys of the descriptor on disk
    pub fn check_required_keys(&self) -> ValidatorResult<KeyFindings> {
        let document = self.load()?;
        Ok(find_missing_and_empty(
            document.root(),
            &self.config.required_top_level_keys,
        ))
    }

    /// Load the descriptor and run the variant, attribute file and inventory checks
    pub fn validate(&self) -> ValidatorResult<Report> {
        let document = self.load()?;
        Ok(self.validate_document(&document))
    }

    /// Run the variant, attribute file and inventory checks on a parsed descriptor
    pub fn validate_document(&self, document: &Document) -> Report {
        let mut report = Report::new();

        let outcome = VariantChecker::new(
            &self.config.repository_root,
            &self.config.required_variant_keys,
        )
        .check(document, &mut report);
        debug!("Variant check finished: {:?}", outcome);

        self.check_attribute_files(outcome.attribute_files(), &mut report);

        if self.config.content_inventory {
            inventory::check_content_inventory(&self.config.repository_root, document, &mut report);
        }

        info!("Validation recorded {} violation groups", report.count());
        report
    }

    /// Clean each attribute file and hand it to the content checks
    fn check_attribute_files(&self, files: &[AttributeFile], report: &mut Report) {
        for file in files {
            let original = match fs::read_to_string(&file.resolved) {
                Ok(text) => text,
                Err(e) => {
                    warn!("Cannot read attribute file {}: {}", file.resolved.display(), e);
                    report.record(
                        categories::ATTRIBUTE_FILE_UNREADABLE,
                        vec![file.declared.clone()],
                    );
                    continue;
                }
            };

            let stripped = preprocess::clean(&original);
            for check in &self.content_checks {
                debug!("Running {} check on {}", check.name(), file.declared);
                check.check(report, &stripped, &file.declared);
            }
        }
    }
}
