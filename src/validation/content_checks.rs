//! Content checks run over cleaned attribute files.

use crate::validation::categories;
use crate::validation::report::Report;

/// A check over one cleaned attribute file.
///
/// Implementations record zero or more violations and never fail; content
/// they cannot make sense of is simply not reported.
pub trait ContentCheck {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    fn check(&self, report: &mut Report, text: &str, path: &str);
}

/// Attribute files must not set `:icons:`
#[derive(Debug, Default, Clone, Copy)]
pub struct IconsAttributeCheck;

impl ContentCheck for IconsAttributeCheck {
    fn name(&self) -> &'static str {
        "icons"
    }

    fn check(&self, report: &mut Report, text: &str, path: &str) {
        if text.contains(":icons:") {
            report.record(categories::ICONS_ATTRIBUTE, vec![path.to_string()]);
        }
    }
}

/// Attribute files must not set `:toc:`
#[derive(Debug, Default, Clone, Copy)]
pub struct TocAttributeCheck;

impl ContentCheck for TocAttributeCheck {
    fn name(&self) -> &'static str {
        "toc"
    }

    fn check(&self, report: &mut Report, text: &str, path: &str) {
        if text.contains(":toc:") {
            report.record(categories::TOC_ATTRIBUTE, vec![path.to_string()]);
        }
    }
}

/// Checks every attribute file goes through, in run order
pub fn default_content_checks() -> Vec<Box<dyn ContentCheck>> {
    vec![Box::new(IconsAttributeCheck), Box::new(TocAttributeCheck)]
}
