//=========================================================================
// Application Context
//=========================================================================
//
// Explicit application handle given to collaborators at construction.
// Replaces a process-wide context singleton: whoever builds the services
// decides where they store data, and the handle can be cloned freely.
//
//=========================================================================

use std::path::{Path, PathBuf};

/// Identity and storage location of the running application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppContext {
    app_name: String,
    data_dir: PathBuf,
}

impl AppContext {
    pub fn new(app_name: impl Into<String>, data_dir: impl Into<PathBuf>) -> Self {
        Self {
            app_name: app_name.into(),
            data_dir: data_dir.into(),
        }
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Settings file for this application: `<data_dir>/<app_name>.toml`.
    pub fn settings_path(&self) -> PathBuf {
        self.data_dir.join(format!("{}.toml", self.app_name))
    }
}
