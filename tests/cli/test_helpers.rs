//! Repository fixtures for CLI tests

use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// A descriptor with every required key and one canonical variant
pub const VALID_DESCRIPTOR: &str = "server: https://pantheon.example.com
repository: docs
variants:
  - name: main
    path: build/attributes.adoc
    canonical: true
assemblies:
  - assemblies/*.adoc
modules:
  - modules/**/*.adoc
resources:
  - images/*.png
";

/// A throwaway docs repository
pub struct TestRepo {
    pub temp_dir: TempDir,
}

impl TestRepo {
    /// Empty repository
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Repository whose content satisfies [`VALID_DESCRIPTOR`]
    pub fn valid() -> Self {
        let repo = Self::new();
        repo.write("pantheon2.yml", VALID_DESCRIPTOR);
        repo.write("build/attributes.adoc", ":product: Pantheon\n");
        repo.write("assemblies/assembly_intro.adoc", "= Intro\n");
        repo.write("modules/core/con_overview.adoc", "= Overview\n");
        repo.write("images/logo.png", "png");
        repo
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn write(&self, relative: &str, contents: &str) {
        let path = self.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
    }
}
