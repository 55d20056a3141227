use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Preview/embed endpoints (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewConfig {
    /// Prefix the extracted file identifier is appended to.
    pub file_base_url: String,
    /// Endpoint for embeddable previews (`?embed_host=share&url=...` is appended).
    pub embed_endpoint: String,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            file_base_url: "https://www.figma.com/file/".to_string(),
            embed_endpoint: "https://www.figma.com/embed".to_string(),
        }
    }
}

/// Global configuration loaded from `~/.config/uxa/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UxaConfig {
    /// Simulated analysis latency in milliseconds.
    pub analysis_delay_ms: u64,
    /// Optional limit on a single analysis in seconds (None = wait indefinitely).
    #[serde(default)]
    pub analysis_timeout_secs: Option<u64>,
    #[serde(default)]
    pub preview: PreviewConfig,
}

impl Default for UxaConfig {
    fn default() -> Self {
        Self {
            analysis_delay_ms: 3000,
            analysis_timeout_secs: None,
            preview: PreviewConfig::default(),
        }
    }
}

impl UxaConfig {
    pub fn analysis_delay(&self) -> Duration {
        Duration::from_millis(self.analysis_delay_ms)
    }

    pub fn analysis_timeout(&self) -> Option<Duration> {
        self.analysis_timeout_secs.map(Duration::from_secs)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("uxa")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UxaConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = UxaConfig::default();
        write_default(&path, &default_cfg)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from_path(&path)
}

/// Load configuration from an explicit file.
pub fn load_from_path(path: &Path) -> Result<UxaConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg: UxaConfig =
        toml::from_str(&data).with_context(|| format!("parsing config {}", path.display()))?;
    Ok(cfg)
}

fn write_default(path: &Path, cfg: &UxaConfig) -> Result<()> {
    let toml = toml::to_string_pretty(cfg)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, toml)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = UxaConfig::default();
        assert_eq!(cfg.analysis_delay(), Duration::from_secs(3));
        assert!(cfg.analysis_timeout().is_none());
        assert_eq!(cfg.preview.file_base_url, "https://www.figma.com/file/");
        assert_eq!(cfg.preview.embed_endpoint, "https://www.figma.com/embed");
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = UxaConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: UxaConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.analysis_delay_ms, cfg.analysis_delay_ms);
        assert_eq!(parsed.preview.file_base_url, cfg.preview.file_base_url);
    }

    #[test]
    fn config_toml_minimal_uses_section_defaults() {
        let cfg: UxaConfig = toml::from_str("analysis_delay_ms = 0").unwrap();
        assert_eq!(cfg.analysis_delay(), Duration::ZERO);
        assert!(cfg.analysis_timeout_secs.is_none());
        assert_eq!(cfg.preview.embed_endpoint, "https://www.figma.com/embed");
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            analysis_delay_ms = 250
            analysis_timeout_secs = 10

            [preview]
            file_base_url = "https://design.example/file/"
            embed_endpoint = "https://design.example/embed"
        "#;
        let cfg: UxaConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.analysis_delay(), Duration::from_millis(250));
        assert_eq!(cfg.analysis_timeout(), Some(Duration::from_secs(10)));
        assert_eq!(cfg.preview.file_base_url, "https://design.example/file/");
    }

    #[test]
    fn load_from_path_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        write_default(&path, &UxaConfig::default()).unwrap();
        let cfg = load_from_path(&path).unwrap();
        assert_eq!(cfg.analysis_delay_ms, 3000);
    }

    #[test]
    fn load_from_path_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "analysis_delay_ms = \"soon\"").unwrap();
        let err = load_from_path(&path).unwrap_err();
        assert!(format!("{err:#}").contains("parsing config"));
    }
}
