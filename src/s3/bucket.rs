use aws_sdk_s3::Client;
use aws_sdk_s3::operation::create_bucket::CreateBucketOutput;
use aws_sdk_s3::types::{BucketLocationConstraint, CreateBucketConfiguration};

/// What became of a create-bucket request. A name collision with a
/// bucket we already own is an operator-recoverable condition, not a
/// failure, so it gets its own arm instead of being folded into `Err`.
#[derive(Debug)]
pub enum CreateBucketOutcome {
    Created(CreateBucketOutput),
    AlreadyOwned,
}

/// Issues a create-bucket request with a location constraint for the
/// given region. Works against AWS and the local emulator alike, the
/// client decides which endpoint is hit.
pub async fn create_bucket(
    client: &Client,
    name: &str,
    region: &str,
) -> Result<CreateBucketOutcome, aws_sdk_s3::Error> {
    let location = CreateBucketConfiguration::builder()
        .location_constraint(BucketLocationConstraint::from(region))
        .build();

    match client
        .create_bucket()
        .bucket(name)
        .create_bucket_configuration(location)
        .send()
        .await
    {
        Ok(response) => Ok(CreateBucketOutcome::Created(response)),
        Err(err) => match aws_sdk_s3::Error::from(err) {
            aws_sdk_s3::Error::BucketAlreadyOwnedByYou(_) => Ok(CreateBucketOutcome::AlreadyOwned),
            other => Err(other),
        },
    }
}

/// Lists bucket names visible to the client.
pub async fn list_bucket_names(client: &Client) -> Result<Vec<String>, aws_sdk_s3::Error> {
    let response = client.list_buckets().send().await?;
    let names = response
        .buckets()
        .iter()
        .filter_map(|bucket| bucket.name().map(str::to_string))
        .collect();
    Ok(names)
}
