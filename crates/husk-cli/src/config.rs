use husk_core::{FrameOptions, Secrets};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
pub struct HuskConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub bundle: BundleConfig,
    #[serde(default)]
    pub frame: FrameOptions,
    #[serde(default)]
    pub secrets: Secrets,
}

#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            bind: default_bind(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BundleConfig {
    #[serde(default = "default_bundle_dir")]
    pub dir: String,
}

impl Default for BundleConfig {
    fn default() -> Self {
        Self {
            dir: default_bundle_dir(),
        }
    }
}

fn default_port() -> u16 {
    8501
}
fn default_bind() -> String {
    "0.0.0.0".to_string()
}
fn default_bundle_dir() -> String {
    "dist".to_string()
}

impl HuskConfig {
    pub fn from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// An absent config file is not an error, it just means all defaults
    /// (empty secrets included).
    pub fn load_or_default(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        if Path::new(path).exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_falls_back_to_defaults() {
        let config: HuskConfig = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 8501);
        assert_eq!(config.server.bind, "0.0.0.0");
        assert_eq!(config.bundle.dir, "dist");
        assert_eq!(config.frame.height, 1000);
        assert!(config.frame.scrolling);
        assert!(config.secrets.is_empty());
    }

    #[test]
    fn partial_secrets_default_to_empty_strings() {
        let config: HuskConfig = toml::from_str(
            r#"
            [secrets]
            api_key = "g-key"
            "#,
        )
        .unwrap();
        assert_eq!(config.secrets.api_key, "g-key");
        assert_eq!(config.secrets.supabase_url, "");
        assert_eq!(config.secrets.supabase_key, "");
    }

    #[test]
    fn full_config_parses() {
        let config: HuskConfig = toml::from_str(
            r#"
            [server]
            port = 9000
            bind = "127.0.0.1"

            [bundle]
            dir = "build/out"

            [frame]
            height = 800
            scrolling = false

            [secrets]
            api_key = "a"
            supabase_url = "https://p.supabase.co"
            supabase_key = "c"
            "#,
        )
        .unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.bundle.dir, "build/out");
        assert_eq!(config.frame.height, 800);
        assert!(!config.frame.scrolling);
        assert_eq!(config.secrets.supabase_url, "https://p.supabase.co");
    }

    #[test]
    fn missing_file_loads_defaults() {
        let config = HuskConfig::load_or_default("definitely-not-here.toml").unwrap();
        assert_eq!(config.server.port, 8501);
        assert!(config.secrets.is_empty());
    }
}
