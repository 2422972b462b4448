use aws_sdk_s3::Client;
use aws_sdk_s3::config::{Credentials, Region};

use crate::config::AwsCredentials;

/// Creates an S3 client with the provided credentials and region.
pub async fn create_s3_client(credentials: &AwsCredentials, region: &str) -> Client {
    let credentials = Credentials::new(
        credentials.access_key_id().to_string(),
        credentials.secret_access_key().to_string(),
        None,
        None,
        "manual",
    );
    let config = aws_config::from_env()
        .credentials_provider(credentials)
        .region(Region::new(region.to_string()))
        .load()
        .await;
    Client::new(&config)
}

/// Creates an S3 client pointed at a local emulator endpoint.
/// Path-style addressing is required because the emulator does not
/// resolve virtual-hosted bucket names.
pub fn create_emulator_client(
    credentials: &AwsCredentials,
    region: &str,
    endpoint_url: &str,
) -> Client {
    let credentials = Credentials::new(
        credentials.access_key_id().to_string(),
        credentials.secret_access_key().to_string(),
        None,
        None,
        "manual",
    );
    let config = aws_sdk_s3::config::Builder::new()
        .behavior_version(aws_sdk_s3::config::BehaviorVersion::latest())
        .credentials_provider(credentials)
        .region(Region::new(region.to_string()))
        .endpoint_url(endpoint_url)
        .force_path_style(true)
        .build();
    Client::from_conf(config)
}
