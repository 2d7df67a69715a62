use super::{without_aws, TEST_CONFIG};
use crate::api::route53::DEFAULT_REGION;
use crate::config::{load_config, parse_config};
use std::fs;
use tempfile::NamedTempFile;

const GATEWAY_SECTION: &str = r#"
    gateway:
      endpoint: "https://dns-gateway.internal"
      api_token: "test_token"
"#;

fn error_text(config: &str) -> String {
    format!("{:#}", parse_config(config).unwrap_err())
}

#[test]
fn test_config_deserialization() {
    let config = parse_config(TEST_CONFIG).unwrap();

    let aws = config.aws.as_ref().unwrap();
    assert_eq!(aws.access_key_id, "AKIDEXAMPLE");
    assert_eq!(aws.region, DEFAULT_REGION);
    assert_eq!(aws.session_token, None);
    assert_eq!(aws.endpoint_url, None);
    assert!(config.gateway.is_none());
    assert_eq!(config.hosted_zone_id, "Z2DOBCW7CSO5EP");
    assert_eq!(config.domain_suffix, "prxtransfer.org");
    assert_eq!(config.subdomains, vec!["wxyz", "kabc"]);
    assert_eq!(config.alias_target.hosted_zone_id, "Z26RNL4JYFTOTI");
    assert_eq!(config.alias_target.dns_name, "elb.example.com");
    assert!(!config.alias_target.evaluate_target_health);
    assert_eq!(config.comment, None);
    assert!(!config.dry_run);
}

#[test]
fn test_credentials_come_from_config() {
    let config = parse_config(TEST_CONFIG).unwrap();
    let credentials = config.aws.unwrap().credentials();

    assert_eq!(credentials.access_key_id(), "AKIDEXAMPLE");
    assert_eq!(
        credentials.secret_access_key(),
        "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY"
    );
    assert_eq!(credentials.session_token(), None);
}

#[test]
fn test_gateway_config() {
    let config = format!("{}{}", without_aws(TEST_CONFIG), GATEWAY_SECTION);
    let config = parse_config(&config).unwrap();

    assert!(config.aws.is_none());
    let gateway = config.gateway.unwrap();
    assert_eq!(gateway.endpoint, "https://dns-gateway.internal");
    assert_eq!(gateway.api_token, "test_token");
}

#[test]
fn test_exactly_one_provider() {
    let both = format!("{}{}", TEST_CONFIG, GATEWAY_SECTION);
    assert!(error_text(&both).contains("Exactly one of `aws` or `gateway`"));

    let neither = without_aws(TEST_CONFIG);
    assert!(error_text(&neither).contains("Exactly one of `aws` or `gateway`"));
}

#[test]
fn test_malformed_endpoints_rejected() {
    let gateway = format!(
        "{}{}",
        without_aws(TEST_CONFIG),
        GATEWAY_SECTION.replace("https://dns-gateway.internal", "not a url")
    );
    assert!(error_text(&gateway).contains("Gateway endpoint is not a valid URL"));

    let aws = TEST_CONFIG.replace(
        "      access_key_id:",
        "      endpoint_url: \"localhost 4566\"\n      access_key_id:",
    );
    assert!(error_text(&aws).contains("AWS endpoint URL is not a valid URL"));
}

#[test]
fn test_load_config_from_file() {
    let temp_file = NamedTempFile::new().unwrap();
    fs::write(&temp_file, TEST_CONFIG).unwrap();

    let config = load_config(temp_file.path()).unwrap();
    assert_eq!(config.subdomains.len(), 2);
}

#[test]
fn test_missing_file() {
    let err = load_config("/nonexistent/zonebatch.yaml").unwrap_err();
    assert!(err.to_string().contains("/nonexistent/zonebatch.yaml"));
}

#[test]
fn test_invalid_config() {
    let invalid_config = r#"
        hosted_zone_id: "Z2DOBCW7CSO5EP"
        # missing required fields
    "#;

    assert!(parse_config(invalid_config).is_err());
}

#[test]
fn test_empty_subdomains_rejected() {
    let config = TEST_CONFIG.replace(
        "subdomains:\n      - \"wxyz\"\n      - \"kabc\"",
        "subdomains: []",
    );
    assert!(config.contains("subdomains: []"));

    assert!(error_text(&config).contains("At least one subdomain is required"));
}

#[test]
fn test_empty_alias_dns_name_rejected() {
    let config = TEST_CONFIG.replace("\"elb.example.com\"", "\"\"");

    assert!(error_text(&config).contains("Alias DNS name cannot be empty"));
}
