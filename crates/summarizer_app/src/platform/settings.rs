use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;
use summarizer_engine::{UploadSettings, DEFAULT_ENDPOINT, DEFAULT_FIELD_NAME};

use super::logging::LogDestination;

pub(crate) const SETTINGS_FILENAME: &str = "summarizer.ron";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    pub endpoint: String,
    pub field_name: String,
    pub log_destination: LogDestination,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            field_name: DEFAULT_FIELD_NAME.to_string(),
            log_destination: LogDestination::default(),
        }
    }
}

impl Settings {
    pub(crate) fn upload_settings(&self) -> UploadSettings {
        UploadSettings {
            endpoint: self.endpoint.clone(),
            field_name: self.field_name.clone(),
        }
    }
}

pub(crate) fn settings_path(dir: &Path) -> PathBuf {
    dir.join(SETTINGS_FILENAME)
}

/// Reads `summarizer.ron` from `dir`. A missing file is `Ok(None)`.
pub(crate) fn read_settings(dir: &Path) -> anyhow::Result<Option<Settings>> {
    let path = settings_path(dir);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(err) => {
            return Err(err).with_context(|| format!("reading {}", path.display()));
        }
    };

    let settings = ron::from_str(&content)
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(Some(settings))
}
