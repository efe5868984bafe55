use std::path::{Path, PathBuf};

pub const DATA_FILE_NAME: &str = "all_predictions_modified.csv";
pub const ASSETS_DIR_NAME: &str = "assets";
pub const LOG_FILE_NAME: &str = "energy-dash.log";
const APP_DIR_NAME: &str = ".energy-dash";

/// Values supplied explicitly by flags or environment. Anything left `None`
/// falls back to a default.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub data_path: Option<PathBuf>,
    pub assets_dir: Option<PathBuf>,
    pub log_path: Option<PathBuf>,
    pub presentation_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub data_path: PathBuf,
    pub assets_dir: PathBuf,
    pub log_path: PathBuf,
    pub presentation_url: Option<String>,
}

impl AppConfig {
    pub fn resolve(overrides: ConfigOverrides) -> Self {
        Self::resolve_in(overrides, Path::new("."), dirs::home_dir())
    }

    /// Defaults prefer files next to the working directory, then `~/.energy-dash/`.
    pub fn resolve_in(overrides: ConfigOverrides, cwd: &Path, home: Option<PathBuf>) -> Self {
        let app_dir = home.map(|h| h.join(APP_DIR_NAME));
        let default_path = |name: &str| -> PathBuf {
            let local = cwd.join(name);
            match &app_dir {
                Some(dir) if !local.exists() => dir.join(name),
                _ => local,
            }
        };

        Self {
            data_path: overrides
                .data_path
                .unwrap_or_else(|| default_path(DATA_FILE_NAME)),
            assets_dir: overrides
                .assets_dir
                .unwrap_or_else(|| default_path(ASSETS_DIR_NAME)),
            log_path: overrides.log_path.unwrap_or_else(|| match &app_dir {
                Some(dir) => dir.join(LOG_FILE_NAME),
                None => cwd.join(LOG_FILE_NAME),
            }),
            presentation_url: overrides.presentation_url.filter(|u| !u.trim().is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_overrides_win() {
        let overrides = ConfigOverrides {
            data_path: Some(PathBuf::from("/data/p.csv")),
            assets_dir: Some(PathBuf::from("/data/img")),
            log_path: Some(PathBuf::from("/tmp/x.log")),
            presentation_url: Some("https://example.org/deck.pdf".to_string()),
        };
        let config = AppConfig::resolve_in(overrides, Path::new("/work"), Some(PathBuf::from("/home/u")));

        assert_eq!(config.data_path, PathBuf::from("/data/p.csv"));
        assert_eq!(config.assets_dir, PathBuf::from("/data/img"));
        assert_eq!(config.log_path, PathBuf::from("/tmp/x.log"));
        assert_eq!(config.presentation_url.as_deref(), Some("https://example.org/deck.pdf"));
    }

    #[test]
    fn test_local_file_preferred_over_home() {
        let cwd = tempfile::tempdir().unwrap();
        fs::write(cwd.path().join(DATA_FILE_NAME), "Region,Year,Month,AveragePrediction\n").unwrap();

        let config = AppConfig::resolve_in(
            ConfigOverrides::default(),
            cwd.path(),
            Some(PathBuf::from("/home/u")),
        );
        assert_eq!(config.data_path, cwd.path().join(DATA_FILE_NAME));
        // No local assets dir, so the home one is used.
        assert_eq!(config.assets_dir, PathBuf::from("/home/u/.energy-dash/assets"));
        assert_eq!(config.log_path, PathBuf::from("/home/u/.energy-dash/energy-dash.log"));
    }

    #[test]
    fn test_without_home_everything_is_local() {
        let cwd = tempfile::tempdir().unwrap();
        let config = AppConfig::resolve_in(ConfigOverrides::default(), cwd.path(), None);
        assert_eq!(config.data_path, cwd.path().join(DATA_FILE_NAME));
        assert_eq!(config.log_path, cwd.path().join(LOG_FILE_NAME));
        assert_eq!(config.presentation_url, None);
    }

    #[test]
    fn test_blank_presentation_url_ignored() {
        let overrides = ConfigOverrides {
            presentation_url: Some("  ".to_string()),
            ..Default::default()
        };
        let config = AppConfig::resolve_in(overrides, Path::new("/work"), None);
        assert_eq!(config.presentation_url, None);
    }
}
