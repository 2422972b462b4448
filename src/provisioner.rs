use aws_sdk_iam::operation::attach_role_policy::AttachRolePolicyOutput;
use tracing::{error, info};

use crate::config::{AwsCredentials, ProvisionerConfig};
use crate::iam;
use crate::s3;
use crate::s3::CreateBucketOutcome;

/// One-shot provisioner for the bucket/role/policy workflow. Credentials
/// are read from the environment once at construction; every operation
/// builds its own short-lived client.
pub struct Provisioner {
    credentials: AwsCredentials,
    config: ProvisionerConfig,
}

impl Provisioner {
    pub fn new(config: ProvisionerConfig) -> Self {
        Self {
            credentials: AwsCredentials::from_env(),
            config,
        }
    }

    pub fn config(&self) -> &ProvisionerConfig {
        &self.config
    }

    /// Creates a bucket in the configured region. A name collision with
    /// a bucket we already own comes back as `AlreadyOwned` so the
    /// operator can pick another name; other provider errors are `Err`.
    pub async fn create_bucket(
        &self,
        name: &str,
    ) -> Result<CreateBucketOutcome, aws_sdk_s3::Error> {
        info!("Creating bucket: {}", name);
        let client = s3::create_s3_client(&self.credentials, &self.config.region).await;
        s3::create_bucket(&client, name, &self.config.region).await
    }

    /// Creates the configured assumable role trusting the configured
    /// account number. Returns the created role's name; errors propagate.
    pub async fn create_role(&self) -> Result<String, aws_sdk_iam::Error> {
        let client = iam::create_iam_client(&self.credentials, &self.config.region).await;
        iam::create_role(&client, &self.config.role_name, self.credentials.account_number()).await
    }

    /// Attaches a managed policy to a role by ARN; errors propagate.
    pub async fn attach_role_policy(
        &self,
        policy_arn: &str,
        role_name: &str,
    ) -> Result<AttachRolePolicyOutput, aws_sdk_iam::Error> {
        let client = iam::create_iam_client(&self.credentials, &self.config.region).await;
        iam::attach_role_policy(&client, policy_arn, role_name).await
    }

    /// Lists buckets on the local emulator and prints each name.
    pub async fn emulator_list_buckets(&self) -> Result<(), aws_sdk_s3::Error> {
        let client = s3::create_emulator_client(
            &self.credentials,
            &self.config.emulator_region,
            &self.config.emulator_endpoint,
        );
        let names = s3::list_bucket_names(&client).await?;
        println!("Existing buckets : ");
        for name in names {
            println!("{}", name);
        }
        Ok(())
    }

    /// Creates a bucket on the local emulator. Returns `true` on
    /// success; any provider error is logged and reported as `false`,
    /// never raised.
    pub async fn emulator_create_bucket(&self, name: &str, region: &str) -> bool {
        let client =
            s3::create_emulator_client(&self.credentials, region, &self.config.emulator_endpoint);
        match s3::create_bucket(&client, name, region).await {
            Ok(_) => true,
            Err(err) => {
                error!("Emulator bucket creation failed: {}", err);
                false
            }
        }
    }
}
