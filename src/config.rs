// std imports
use std::path::PathBuf;

// local imports
use crate::error::*;
use crate::settings::{Settings, SourceFile};

// ---

pub const APP_NAME: &str = "extkit";

/// Directory of the user configuration file, `None` if the home directory is unknown.
///
/// macOS uses the XDG layout, `$XDG_CONFIG_HOME/extkit` or `~/.config/extkit`.
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .and_then(dirs_sys::is_absolute_path)
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")));

    #[cfg(not(target_os = "macos"))]
    let base = dirs::config_dir();

    base.map(|dir| dir.join(APP_NAME))
}

/// Starts loading settings from the given configuration files.
pub fn at<I, P>(paths: I) -> Loader
where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
{
    Loader {
        paths: paths.into_iter().map(Into::into).collect(),
        no_default: false,
        default_path: config_dir().map(|dir| dir.join("config.yaml")),
    }
}

/// Collects the configuration files to layer over the embedded defaults.
///
/// The user configuration file from [`config_dir`] comes first unless disabled,
/// followed by explicitly given files in order.
pub struct Loader {
    paths: Vec<PathBuf>,
    no_default: bool,
    default_path: Option<PathBuf>,
}

impl Loader {
    /// Skips the user configuration file.
    pub fn no_default(self, no_default: bool) -> Self {
        Self { no_default, ..self }
    }

    pub fn sources(&self) -> Vec<SourceFile> {
        let default = self
            .default_path
            .iter()
            .filter(|_| !self.no_default)
            .map(SourceFile::optional);
        let explicit = self.paths.iter().map(SourceFile::required);
        default.chain(explicit).collect()
    }

    pub fn load(self) -> Result<Settings> {
        Settings::load(&self.sources())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loader(paths: &[&str], default_path: Option<&str>) -> Loader {
        Loader {
            default_path: default_path.map(PathBuf::from),
            ..at(paths.iter().copied())
        }
    }

    #[test]
    fn test_config_dir() {
        if let Some(dir) = config_dir() {
            assert!(dir.ends_with(APP_NAME));
        }
    }

    #[test]
    fn test_sources() {
        let sources = loader(&["a.yaml", "b.toml"], Some("/home/user/.config/extkit/config.yaml")).sources();
        assert_eq!(
            sources,
            vec![
                SourceFile::optional("/home/user/.config/extkit/config.yaml"),
                SourceFile::required("a.yaml"),
                SourceFile::required("b.toml"),
            ]
        );
    }

    #[test]
    fn test_sources_no_default() {
        let sources = loader(&["a.yaml"], Some("/etc/extkit.yaml")).no_default(true).sources();
        assert_eq!(sources, vec![SourceFile::required("a.yaml")]);

        let sources = loader(&[], None).sources();
        assert!(sources.is_empty());
    }

    #[test]
    fn test_load_without_files() {
        let settings = loader(&[], None).load().unwrap();
        assert_eq!(settings, Settings::default());
    }
}
