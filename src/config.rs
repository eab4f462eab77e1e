use std::path::{Path, PathBuf};

use crossterm::event::KeyCode;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub colors: ColorsConfig,
    pub keybinds: KeybindsConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Render tick interval in milliseconds.
    pub refresh_rate_ms: u64,
    /// Sampler cycle interval in milliseconds.
    pub sample_rate_ms: u64,
    /// Rolling window length of every chart.
    pub chart_points: usize,
    /// Rows in the top-process table.
    pub process_rows: usize,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        GeneralConfig {
            refresh_rate_ms: 1000,
            sample_rate_ms: 1000,
            chart_points: 60,
            process_rows: 10,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ColorsConfig {
    pub theme: String,
    pub primary_series: String,
    pub secondary_series: String,
}

impl Default for ColorsConfig {
    fn default() -> Self {
        ColorsConfig {
            theme: "dark".to_string(),
            primary_series: "#1f538d".to_string(),
            secondary_series: "#ff7f0e".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct KeybindsConfig {
    pub quit: String,
    pub help: String,
    pub refresh: String,
    pub cpu_chart: String,
    pub memory_chart: String,
    pub gpu_chart: String,
    pub disk_chart: String,
    pub network_chart: String,
}

impl Default for KeybindsConfig {
    fn default() -> Self {
        KeybindsConfig {
            quit: "q".to_string(),
            help: "?".to_string(),
            refresh: "r".to_string(),
            cpu_chart: "1".to_string(),
            memory_chart: "2".to_string(),
            gpu_chart: "3".to_string(),
            disk_chart: "4".to_string(),
            network_chart: "5".to_string(),
        }
    }
}

/// Parse a config key name into a `KeyCode`. Single characters map
/// directly; a few named keys are recognized.
pub fn parse_key(s: &str) -> Option<KeyCode> {
    match s {
        "Enter" => Some(KeyCode::Enter),
        "Escape" | "Esc" => Some(KeyCode::Esc),
        "Tab" => Some(KeyCode::Tab),
        "Space" => Some(KeyCode::Char(' ')),
        _ => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(KeyCode::Char(c)),
                _ => None,
            }
        }
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("sysdash").join("config.toml"))
}

pub fn load_config() -> Config {
    match config_path() {
        Some(path) if path.exists() => load_config_from_path(&path),
        _ => Config::default(),
    }
}

pub fn load_config_from_path(path: &Path) -> Config {
    match std::fs::read_to_string(path) {
        Ok(contents) => toml::from_str(&contents).unwrap_or_default(),
        Err(_) => Config::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = Config::default();
        assert_eq!(config.general.refresh_rate_ms, 1000);
        assert_eq!(config.general.sample_rate_ms, 1000);
        assert_eq!(config.general.chart_points, 60);
        assert_eq!(config.general.process_rows, 10);
        assert_eq!(config.colors.theme, "dark");
        assert_eq!(config.keybinds.quit, "q");
        assert_eq!(config.keybinds.cpu_chart, "1");
    }

    #[test]
    fn parse_partial_toml() {
        let toml_str = r#"
[general]
refresh_rate_ms = 500
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.refresh_rate_ms, 500);
        // Other fields should be defaults
        assert_eq!(config.general.sample_rate_ms, 1000);
        assert_eq!(config.keybinds.help, "?");
    }

    #[test]
    fn parse_full_toml() {
        let toml_str = r##"
[general]
refresh_rate_ms = 2000
sample_rate_ms = 500
chart_points = 120
process_rows = 5

[colors]
theme = "light"
primary_series = "#00ff00"

[keybinds]
quit = "x"
gpu_chart = "g"
"##;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.refresh_rate_ms, 2000);
        assert_eq!(config.general.sample_rate_ms, 500);
        assert_eq!(config.general.chart_points, 120);
        assert_eq!(config.general.process_rows, 5);
        assert_eq!(config.colors.theme, "light");
        assert_eq!(config.colors.primary_series, "#00ff00");
        assert_eq!(config.keybinds.quit, "x");
        assert_eq!(config.keybinds.gpu_chart, "g");
    }

    #[test]
    fn missing_file_returns_default() {
        let config = load_config_from_path(Path::new("/nonexistent/path/config.toml"));
        assert_eq!(config.general.refresh_rate_ms, 1000);
    }

    #[test]
    fn invalid_toml_returns_default() {
        let temp = std::env::temp_dir().join("sysdash_test_invalid.toml");
        std::fs::write(&temp, "this is not valid toml {{{{").unwrap();
        let config = load_config_from_path(&temp);
        assert_eq!(config.general.refresh_rate_ms, 1000);
        let _ = std::fs::remove_file(&temp);
    }

    #[test]
    fn parse_key_handles_named_and_single_chars() {
        assert_eq!(parse_key("q"), Some(KeyCode::Char('q')));
        assert_eq!(parse_key("?"), Some(KeyCode::Char('?')));
        assert_eq!(parse_key("Enter"), Some(KeyCode::Enter));
        assert_eq!(parse_key("Esc"), Some(KeyCode::Esc));
        assert_eq!(parse_key("Space"), Some(KeyCode::Char(' ')));
        assert_eq!(parse_key("longer"), None);
        assert_eq!(parse_key(""), None);
    }
}
