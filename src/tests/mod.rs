mod config;

use crate::batch::AliasTarget;

pub(crate) fn elb_alias() -> AliasTarget {
    AliasTarget {
        hosted_zone_id: "Z26RNL4JYFTOTI".to_string(),
        dns_name: "elb.example.com".to_string(),
        evaluate_target_health: false,
    }
}

pub(crate) const TEST_CONFIG: &str = r#"
    aws:
      access_key_id: "AKIDEXAMPLE"
      secret_access_key: "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY"
    hosted_zone_id: "Z2DOBCW7CSO5EP"
    domain_suffix: "prxtransfer.org"
    subdomains:
      - "wxyz"
      - "kabc"
    alias_target:
      hosted_zone_id: "Z26RNL4JYFTOTI"
      dns_name: "elb.example.com"
"#;

/// Drops the `aws:` section from a config written like `TEST_CONFIG`.
pub(crate) fn without_aws(config: &str) -> String {
    config
        .lines()
        .filter(|line| {
            let trimmed = line.trim_start();
            !(trimmed.starts_with("aws:")
                || trimmed.starts_with("access_key_id:")
                || trimmed.starts_with("secret_access_key:"))
        })
        .map(|line| format!("{}\n", line))
        .collect()
}
