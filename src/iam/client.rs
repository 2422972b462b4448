use aws_sdk_iam::Client;
use aws_sdk_iam::config::{Credentials, Region};

use crate::config::AwsCredentials;

/// Creates an IAM client with the provided credentials. IAM is a global
/// service but the SDK still wants a signing region.
pub async fn create_iam_client(credentials: &AwsCredentials, region: &str) -> Client {
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

/// Creates an IAM client pointed at a local emulator endpoint.
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
    let config = aws_sdk_iam::config::Builder::new()
        .behavior_version(aws_sdk_iam::config::BehaviorVersion::latest())
        .credentials_provider(credentials)
        .region(Region::new(region.to_string()))
        .endpoint_url(endpoint_url)
        .build();
    Client::from_conf(config)
}
