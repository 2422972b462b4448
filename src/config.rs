use serde::{Deserialize, Serialize};
use tracing::warn;

const APP_NAME: &str = "S3Provisioner";

/// Environment variable holding the managed read-only policy ARN.
pub const READ_ONLY_POLICY_ARN_VAR: &str = "s3ReadOnlyPolicyArn";

/// Provisioning targets. Every value the original tool hardcoded inline
/// lives here instead, with the original literals as defaults.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProvisionerConfig {
    #[serde(default = "default_region")]
    pub region: String,
    #[serde(default = "default_role_name")]
    pub role_name: String,
    #[serde(default = "default_emulator_endpoint")]
    pub emulator_endpoint: String,
    #[serde(default = "default_region")]
    pub emulator_region: String,
}

fn default_region() -> String {
    "ap-northeast-2".to_string()
}

fn default_role_name() -> String {
    "awesome-winter".to_string()
}

fn default_emulator_endpoint() -> String {
    "http://localhost:4566".to_string()
}

impl Default for ProvisionerConfig {
    fn default() -> Self {
        Self {
            region: default_region(),
            role_name: default_role_name(),
            emulator_endpoint: default_emulator_endpoint(),
            emulator_region: default_region(),
        }
    }
}

/// Load config from file. Returns default if file doesn't exist or is invalid.
pub fn load_config() -> ProvisionerConfig {
    match confy::load(APP_NAME, None) {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!("Could not load config, falling back to defaults: {}", e);
            ProvisionerConfig::default()
        }
    }
}

/// Save config to file.
pub fn save_config(config: &ProvisionerConfig) -> Result<(), confy::ConfyError> {
    confy::store(APP_NAME, None, config)
}

/// Get the config file path for debugging purposes.
pub fn get_config_path() -> Option<std::path::PathBuf> {
    confy::get_configuration_file_path(APP_NAME, None).ok()
}

/// Static AWS credentials plus the account number, read from the process
/// environment exactly once. Missing values stay empty and surface as
/// provider-side auth failures when the first call is made; there is no
/// local validation.
#[derive(Debug, Clone)]
pub struct AwsCredentials {
    access_key_id: String,
    secret_access_key: String,
    account_number: String,
}

impl AwsCredentials {
    pub fn from_env() -> Self {
        Self {
            access_key_id: read_var("AWS_ACCESS_KEY_ID"),
            secret_access_key: read_var("AWS_SECRET_ACCESS_KEY"),
            account_number: read_var("AWS_ACCOUNT_NUMBER"),
        }
    }

    pub fn access_key_id(&self) -> &str {
        &self.access_key_id
    }

    pub fn secret_access_key(&self) -> &str {
        &self.secret_access_key
    }

    pub fn account_number(&self) -> &str {
        &self.account_number
    }
}

fn read_var(name: &str) -> String {
    match std::env::var(name) {
        Ok(value) => value,
        Err(_) => {
            warn!(
                "{} is not set; provider calls will fail at request time",
                name
            );
            String::new()
        }
    }
}
