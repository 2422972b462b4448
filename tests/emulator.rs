//! Integration tests against a local S3 emulator (LocalStack on
//! http://localhost:4566). Tests that need the emulator running are
//! `#[ignore]`d; run them with `cargo test -- --ignored`.

use s3_provisioner::{CreateBucketOutcome, Provisioner, ProvisionerConfig};
use s3_provisioner::{iam, s3};

fn emulator_provisioner(endpoint: &str) -> Provisioner {
    let config = ProvisionerConfig {
        emulator_endpoint: endpoint.to_string(),
        ..ProvisionerConfig::default()
    };
    Provisioner::new(config)
}

#[tokio::test]
async fn unreachable_emulator_returns_false() {
    // Nothing listens on port 1; the connection error must be swallowed.
    let provisioner = emulator_provisioner("http://127.0.0.1:1");
    let created = provisioner
        .emulator_create_bucket("test2-bucket", "ap-northeast-2")
        .await;
    assert!(!created);
}

#[tokio::test]
#[ignore = "requires a running local emulator on localhost:4566"]
async fn create_then_list_shows_bucket() {
    let provisioner = emulator_provisioner("http://localhost:4566");
    let created = provisioner
        .emulator_create_bucket("test2-bucket", "ap-northeast-2")
        .await;
    assert!(created);

    let credentials = s3_provisioner::AwsCredentials::from_env();
    let client =
        s3::create_emulator_client(&credentials, "ap-northeast-2", "http://localhost:4566");
    let names = s3::list_bucket_names(&client).await.unwrap();
    assert!(names.iter().any(|name| name == "test2-bucket"));
}

#[tokio::test]
#[ignore = "requires a running local emulator on localhost:4566"]
async fn repeated_create_reports_already_owned() {
    let credentials = s3_provisioner::AwsCredentials::from_env();
    let client =
        s3::create_emulator_client(&credentials, "ap-northeast-2", "http://localhost:4566");

    let first = s3::create_bucket(&client, "repeat-bucket", "ap-northeast-2")
        .await
        .unwrap();
    assert!(matches!(first, CreateBucketOutcome::Created(_)));

    let second = s3::create_bucket(&client, "repeat-bucket", "ap-northeast-2")
        .await
        .unwrap();
    assert!(matches!(second, CreateBucketOutcome::AlreadyOwned));
}

#[tokio::test]
#[ignore = "requires a running local emulator on localhost:4566"]
async fn role_create_attach_and_repeat_create() {
    let credentials = s3_provisioner::AwsCredentials::from_env();
    let config = ProvisionerConfig::default();
    let client =
        iam::create_emulator_client(&credentials, &config.region, "http://localhost:4566");

    let created = iam::create_role(&client, &config.role_name, credentials.account_number())
        .await
        .unwrap();
    assert_eq!(created, "awesome-winter");

    let attached = iam::attach_role_policy(
        &client,
        "arn:aws:iam::aws:policy/AmazonS3ReadOnlyAccess",
        &created,
    )
    .await;
    assert!(attached.is_ok());

    // Creating the same role again surfaces the provider's
    // already-exists error instead of succeeding silently.
    let repeat = iam::create_role(&client, &config.role_name, credentials.account_number()).await;
    assert!(repeat.is_err());
}
