//! Server configuration from command-line flags and environment

use crate::store::S3ClientConfig;
use clap::Parser;

#[derive(Parser, Clone)]
#[command(name = "s3-browser", version, about = "Browse buckets in an S3-compatible object store")]
pub struct AppConfig {
    /// Object store endpoint URL
    #[arg(long, env = "LOCALSTACK_ENDPOINT", default_value = "http://localhost:4566")]
    pub endpoint: String,

    /// Region used for signing and bucket creation
    #[arg(long, env = "AWS_REGION", default_value = "us-east-1")]
    pub region: String,

    #[arg(long, env = "AWS_ACCESS_KEY_ID", default_value = "test")]
    pub access_key_id: String,

    #[arg(long, env = "AWS_SECRET_ACCESS_KEY", default_value = "test", hide_env_values = true)]
    pub secret_access_key: String,

    /// Address the HTTP API listens on
    #[arg(long, env = "S3_BROWSER_BIND", default_value = "127.0.0.1:3000")]
    pub bind: String,
}

impl AppConfig {
    pub fn s3_client_config(&self) -> S3ClientConfig {
        S3ClientConfig {
            endpoint_url: Some(self.endpoint.clone()),
            region: self.region.clone(),
            access_key_id: self.access_key_id.clone(),
            secret_access_key: self.secret_access_key.clone(),
            force_path_style: true,
        }
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("endpoint", &self.endpoint)
            .field("region", &self.region)
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"<redacted>")
            .field("bind", &self.bind)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::AppConfig;
    use clap::Parser;

    #[test]
    fn flags_override_defaults_and_secret_is_redacted() {
        let config = AppConfig::parse_from([
            "s3-browser",
            "--endpoint",
            "http://minio:9000",
            "--region",
            "eu-west-1",
            "--secret-access-key",
            "hunter2",
        ]);
        assert_eq!(config.endpoint, "http://minio:9000");
        assert_eq!(config.region, "eu-west-1");

        let client = config.s3_client_config();
        assert_eq!(client.endpoint_url.as_deref(), Some("http://minio:9000"));
        assert!(client.force_path_style);

        let debug = format!("{:?}", config);
        assert!(!debug.contains("hunter2"));
    }
}
