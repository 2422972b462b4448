pub mod bucket;
pub mod client;

pub use bucket::{CreateBucketOutcome, create_bucket, list_bucket_names};
pub use client::{create_emulator_client, create_s3_client};
