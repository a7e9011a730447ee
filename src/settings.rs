// std imports
use std::include_str;
use std::path::PathBuf;

// third-party imports
use config::{Config, File, FileFormat};
use serde::Deserialize;

// local imports
use crate::error::*;
use crate::relative::RelativeFormat;

// ---

static DEFAULT_SETTINGS: &str = include_str!("../etc/defaults/config.yaml");

// ---

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    pub relative_time: RelativeFormat,
    pub random: RandomSettings,
}

impl Settings {
    /// Loads embedded defaults and layers the given files on top, later files win.
    pub fn load(files: &[SourceFile]) -> Result<Self> {
        let mut builder = Config::builder().add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Yaml));
        for file in files {
            log::debug!("settings source {:?} (required: {})", file.path, file.required);
            builder = builder.add_source(File::from(file.path.as_path()).required(file.required));
        }

        Ok(builder.build()?.try_deserialize()?)
    }
}

// ---

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RandomSettings {
    pub seed: Option<u64>,
}

// ---

/// A configuration file to be layered over the defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub required: bool,
}

impl SourceFile {
    pub fn required(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            required: true,
        }
    }

    pub fn optional(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            required: false,
        }
    }
}
