use super::FilesiftConfig;
use anyhow::{Context, Result, ensure};
use figment::{
    Figment,
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
};
use std::path::Path;

// Embed the default config at compile time
const DEFAULT_CONFIG: &str = include_str!("../../default-config.toml");

const PROJECT_CONFIG_STEM: &str = "filesift";
const ENV_PREFIX: &str = "FILESIFT_";

impl FilesiftConfig {
    /// Load the layered configuration
    ///
    /// With `custom_config` only that file is merged over the defaults;
    /// otherwise the user and project files are picked up when present.
    /// Environment variables always win.
    pub fn load(custom_config: Option<&str>) -> Result<Self> {
        Self::from_figment(Self::figment(custom_config)?)
    }

    /// The merged figment before extraction
    pub fn figment(custom_config: Option<&str>) -> Result<Figment> {
        let mut figment = Figment::from(Serialized::defaults(FilesiftConfig::default()))
            .merge(Toml::string(DEFAULT_CONFIG));

        if let Some(custom_path) = custom_config {
            let path = Path::new(custom_path);
            ensure!(path.is_file(), "Config file not found: {}", custom_path);
            figment = merge_file(figment, path);
        } else {
            let user_dir = Self::user_config_dir();
            for name in ["config.toml", "config.json", "config.yaml", "config.yml"] {
                figment = merge_file(figment, &Path::new(&user_dir).join(name));
            }
            for ext in ["toml", "json", "yaml", "yml"] {
                figment = merge_file(figment, Path::new(&format!("{PROJECT_CONFIG_STEM}.{ext}")));
            }
        }

        Ok(figment.merge(Env::prefixed(ENV_PREFIX).split("__")))
    }

    /// Extract a configuration from an already-built figment
    pub fn from_figment(figment: Figment) -> Result<Self> {
        let config: FilesiftConfig = figment
            .extract()
            .context("Failed to parse filesift configuration")?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        ensure!(self.enrich.sniff_bytes > 0, "enrich.sniff_bytes must be greater than zero");
        if let Some(threads) = self.enrich.max_threads {
            ensure!(threads > 0, "enrich.max_threads must be greater than zero");
        }
        Ok(())
    }

    fn user_config_dir() -> String {
        match std::env::var("HOME") {
            Ok(home) => format!("{}/.config/filesift", home),
            Err(_) => "~/.config/filesift".to_string(),
        }
    }
}

/// Merge a config file, choosing the format from its extension.
/// Missing files contribute nothing.
fn merge_file(figment: Figment, path: &Path) -> Figment {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_lowercase();

    match extension.as_str() {
        "json" => figment.merge(Json::file(path)),
        "yaml" | "yml" => figment.merge(Yaml::file(path)),
        _ => figment.merge(Toml::file(path)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn embedded_defaults_match_struct_defaults() {
        let figment = Figment::new().merge(Toml::string(DEFAULT_CONFIG));
        let config = FilesiftConfig::from_figment(figment).unwrap();
        assert_eq!(config, FilesiftConfig::default());
    }

    #[test]
    fn custom_toml_overrides_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("custom.toml");
        fs::write(&path, "[enrich]\nsniff_bytes = 512\nparallel = true\n").unwrap();

        let config = FilesiftConfig::load(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(config.enrich.sniff_bytes, 512);
        assert!(config.enrich.parallel);
        assert!(!config.scan.follow_symlinks);
    }

    #[test]
    fn custom_yaml_is_detected_by_extension() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("custom.yaml");
        fs::write(&path, "scan:\n  follow_symlinks: true\n").unwrap();

        let config = FilesiftConfig::load(Some(path.to_str().unwrap())).unwrap();
        assert!(config.scan.follow_symlinks);
        assert_eq!(config.enrich.sniff_bytes, 4096);
    }

    #[test]
    fn custom_json_is_detected_by_extension() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("custom.json");
        fs::write(&path, r#"{"enrich": {"max_threads": 2}}"#).unwrap();

        let config = FilesiftConfig::load(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(config.enrich.max_threads, Some(2));
    }

    #[test]
    fn missing_custom_config_is_an_error() {
        let result = FilesiftConfig::load(Some("definitely_missing_filesift.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn zero_sniff_bytes_is_rejected() {
        let figment = Figment::from(Serialized::defaults(FilesiftConfig::default()))
            .merge(Toml::string("[enrich]\nsniff_bytes = 0\n"));
        assert!(FilesiftConfig::from_figment(figment).is_err());
    }
}
