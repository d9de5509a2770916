use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClientConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,

    /// Version of the Solr server the client talks to (e.g. 8.1)
    #[serde(default = "default_api_version")]
    pub api_version: f32,

    /// Log method and path of every request before it is sent
    #[serde(default)]
    pub log_requests: bool,
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    8983
}

fn default_api_version() -> f32 {
    8.1
}

impl ClientConfig {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: ClientConfig = serde_json::from_str(&contents)?;
        tracing::debug!("Loaded client config from {}", path);
        Ok(config)
    }

    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            api_version: default_api_version(),
            log_requests: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url(), "http://localhost:8983");
        assert!(!config.log_requests);
    }

    #[test]
    fn test_load_fills_missing_fields_with_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"host": "solr.internal", "log_requests": true}}"#).unwrap();

        let config = ClientConfig::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.host, "solr.internal");
        assert_eq!(config.port, 8983);
        assert!(config.log_requests);
    }

    #[test]
    fn test_load_missing_file_fails() {
        assert!(ClientConfig::load("/nonexistent/solrkit.json").is_err());
    }
}
