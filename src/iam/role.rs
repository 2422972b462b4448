use aws_sdk_iam::Client;
use aws_sdk_iam::operation::attach_role_policy::AttachRolePolicyOutput;
use serde_json::json;
use tracing::info;

/// Builds the trust policy document allowing `sts:AssumeRole` for the
/// given account number, with an empty condition.
pub fn trust_policy_document(account_number: &str) -> String {
    json!({
        "Version": "2012-10-17",
        "Statement": [
            {
                "Effect": "Allow",
                "Action": "sts:AssumeRole",
                "Principal": {
                    "AWS": account_number
                },
                "Condition": {}
            }
        ]
    })
    .to_string()
}

/// Requests creation of an assumable role under `role_name`, trusting
/// `account_number`. Returns the created role's name. Provider errors
/// (role already exists, permission denied, ...) propagate to the caller.
pub async fn create_role(
    client: &Client,
    role_name: &str,
    account_number: &str,
) -> Result<String, aws_sdk_iam::Error> {
    let response = client
        .create_role()
        .role_name(role_name)
        .assume_role_policy_document(trust_policy_document(account_number))
        .send()
        .await?;

    // The provider echoes the requested name back in the role payload.
    let created = response
        .role()
        .map(|role| role.role_name().to_string())
        .unwrap_or_else(|| role_name.to_string());
    info!("Created role: {}", created);
    Ok(created)
}

/// Attaches a managed policy to a role by ARN. The provider response is
/// passed through unchanged.
pub async fn attach_role_policy(
    client: &Client,
    policy_arn: &str,
    role_name: &str,
) -> Result<AttachRolePolicyOutput, aws_sdk_iam::Error> {
    let response = client
        .attach_role_policy()
        .role_name(role_name)
        .policy_arn(policy_arn)
        .send()
        .await?;
    info!("Attached policy {} to role {}", policy_arn, role_name);
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn trust_policy_shape() {
        let document = trust_policy_document("123456789012");
        let parsed: Value = serde_json::from_str(&document).unwrap();

        assert_eq!(parsed["Version"], "2012-10-17");
        let statements = parsed["Statement"].as_array().unwrap();
        assert_eq!(statements.len(), 1);

        let statement = &statements[0];
        assert_eq!(statement["Effect"], "Allow");
        assert_eq!(statement["Action"], "sts:AssumeRole");
        assert_eq!(statement["Principal"]["AWS"], "123456789012");
        assert!(statement["Condition"].as_object().unwrap().is_empty());
    }

    #[test]
    fn trust_policy_embeds_configured_account() {
        let document = trust_policy_document("000000000000");
        assert!(document.contains("000000000000"));
        assert!(!document.contains("123456789012"));
    }
}
