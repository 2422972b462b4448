pub mod config;
pub mod iam;
pub mod provisioner;
pub mod s3;

pub use config::{AwsCredentials, ProvisionerConfig};
pub use provisioner::Provisioner;
pub use s3::CreateBucketOutcome;
