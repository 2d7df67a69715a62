use aws_credential_types::Credentials;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError};

use crate::api::route53::DEFAULT_REGION;
use crate::batch::AliasTarget;

#[derive(Debug, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_provider"))]
pub struct Config {
    #[serde(default)]
    #[validate(nested)]
    pub aws: Option<AwsConfig>,

    #[serde(default)]
    #[validate(nested)]
    pub gateway: Option<GatewayConfig>,

    #[validate(length(min = 1, message = "Hosted zone ID cannot be empty"))]
    pub hosted_zone_id: String,

    #[validate(length(min = 1, message = "Domain suffix cannot be empty"))]
    pub domain_suffix: String,

    #[validate(length(min = 1, message = "At least one subdomain is required"))]
    pub subdomains: Vec<String>,

    #[validate(nested)]
    pub alias_target: AliasConfig,

    #[serde(default)]
    pub comment: Option<String>,

    #[serde(default)]
    pub dry_run: bool,
}

/// Route53 access through the AWS SDK. Keys are taken from here only.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AwsConfig {
    #[validate(length(min = 1, message = "AWS access key ID cannot be empty"))]
    pub access_key_id: String,

    #[validate(length(min = 1, message = "AWS secret access key cannot be empty"))]
    pub secret_access_key: String,

    #[serde(default)]
    pub session_token: Option<String>,

    #[serde(default = "default_region")]
    #[validate(length(min = 1, message = "AWS region cannot be empty"))]
    pub region: String,

    #[serde(default)]
    #[validate(url(message = "AWS endpoint URL is not a valid URL"))]
    pub endpoint_url: Option<String>,
}

/// An HTTP gateway accepting the JSON change-batch body with a bearer token.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GatewayConfig {
    #[validate(url(message = "Gateway endpoint is not a valid URL"))]
    pub endpoint: String,

    #[validate(length(min = 1, message = "Gateway API token cannot be empty"))]
    pub api_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AliasConfig {
    #[validate(length(min = 1, message = "Alias hosted zone ID cannot be empty"))]
    pub hosted_zone_id: String,

    #[validate(length(min = 1, message = "Alias DNS name cannot be empty"))]
    pub dns_name: String,

    #[serde(default)]
    pub evaluate_target_health: bool,
}

fn default_region() -> String {
    DEFAULT_REGION.to_string()
}

fn validate_provider(config: &Config) -> Result<(), ValidationError> {
    if config.aws.is_some() == config.gateway.is_some() {
        let mut err = ValidationError::new("provider");
        err.message = Some(Cow::Borrowed(
            "Exactly one of `aws` or `gateway` must be configured",
        ));
        return Err(err);
    }
    Ok(())
}

impl AwsConfig {
    pub fn credentials(&self) -> Credentials {
        Credentials::new(
            self.access_key_id.clone(),
            self.secret_access_key.clone(),
            self.session_token.clone(),
            None,
            "zonebatch-config",
        )
    }
}

impl From<AliasConfig> for AliasTarget {
    fn from(alias: AliasConfig) -> Self {
        Self {
            hosted_zone_id: alias.hosted_zone_id,
            dns_name: alias.dns_name,
            evaluate_target_health: alias.evaluate_target_health,
        }
    }
}
