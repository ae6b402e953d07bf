//! Module file-name gate.

use std::collections::BTreeSet;
use std::path::Path;

use once_cell::sync::Lazy;

// File names that may be pushed into a running container as a module update.
static ALLOWED_MODULE_FILES: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "kyber.dll",
        "vanillabundleaggregation.kb",
        "ca_root.pem",
        "vivoxsdk.dll",
    ]
});

/// Closed set of base file names accepted as module updates.
///
/// Membership is case-insensitive and ignores any directory components of
/// the candidate path. The set is fixed for the process lifetime.
#[derive(Debug, Clone)]
pub struct ModuleWhitelist {
    allowed: BTreeSet<String>,
}

impl ModuleWhitelist {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let allowed = names
            .into_iter()
            .map(|s| s.into().to_ascii_lowercase())
            .collect();
        Self { allowed }
    }

    /// Strip directory components, lower-case the base name, and test set
    /// membership.
    pub fn allows(&self, path: &str) -> bool {
        let base = Path::new(path)
            .file_name()
            .map(|n| n.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();
        self.allowed.contains(base.as_str())
    }
}

impl Default for ModuleWhitelist {
    fn default() -> Self {
        Self::new(ALLOWED_MODULE_FILES.iter().copied())
    }
}
