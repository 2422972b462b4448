pub mod client;
pub mod role;

pub use client::{create_emulator_client, create_iam_client};
pub use role::{attach_role_policy, create_role, trust_policy_document};
