use std::io::Write;

use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use s3_provisioner::CreateBucketOutcome;
use s3_provisioner::Provisioner;
use s3_provisioner::config;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Initialize logging
    let file_appender = tracing_appender::rolling::never(".", "s3_provisioner.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with(fmt::layer().with_writer(non_blocking))
        .with(fmt::layer())
        .init();

    let app_config = config::load_config();
    info!("Config loaded from: {:?}", config::get_config_path());

    // Materialize defaults on first run so the operator has a file to edit.
    if let Err(e) = config::save_config(&app_config) {
        warn!("Failed to save config: {:?}", e);
    }

    let provisioner = Provisioner::new(app_config);

    // Against AWS: bucket, role, policy attachment
    let bucket_name = prompt("Enter new bucket name : ")?;
    match provisioner.create_bucket(bucket_name.trim()).await {
        Ok(CreateBucketOutcome::Created(response)) => {
            println!("Bucket : {:?}", response);
        }
        Ok(CreateBucketOutcome::AlreadyOwned) => {
            println!("Bucket already exists. Enter another bucket name");
        }
        Err(err) => {
            println!("Bucket creation failed: {}", err);
        }
    }

    let role_name = provisioner.create_role().await?;
    println!("Role name : {}", role_name);

    let policy_arn = std::env::var(config::READ_ONLY_POLICY_ARN_VAR).unwrap_or_else(|_| {
        warn!(
            "{} is not set; the attach request will fail at the provider",
            config::READ_ONLY_POLICY_ARN_VAR
        );
        String::new()
    });
    let attach_response = provisioner.attach_role_policy(&policy_arn, &role_name).await?;
    println!("{:?}", attach_response);

    // Against the local emulator
    let emulator_region = provisioner.config().emulator_region.clone();
    let created = provisioner
        .emulator_create_bucket("test2-bucket", &emulator_region)
        .await;
    println!("{}", created);
    provisioner.emulator_list_buckets().await?;

    Ok(())
}

fn prompt(message: &str) -> Result<String, std::io::Error> {
    print!("{}", message);
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line)
}
