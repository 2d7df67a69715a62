use serde::{Deserialize, Serialize};

use crate::error::{Result, ZoneBatchError};

// RFC 1035 limits, without the trailing root dot
const MAX_LABEL_LEN: usize = 63;
const MAX_NAME_LEN: usize = 253;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChangeAction {
    Upsert,
    Create,
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordType {
    A,
    Aaaa,
    Cname,
}

/// Where an alias record points: another resource inside the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasTarget {
    pub hosted_zone_id: String,
    pub dns_name: String,
    pub evaluate_target_health: bool,
}

/// A single record mutation. Fields are read-only after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeDirective {
    action: ChangeAction,
    record_name: String,
    record_type: RecordType,
    alias_target: AliasTarget,
}

impl ChangeDirective {
    pub fn new(
        action: ChangeAction,
        record_name: impl Into<String>,
        record_type: RecordType,
        alias_target: AliasTarget,
    ) -> Self {
        Self {
            action,
            record_name: record_name.into(),
            record_type,
            alias_target,
        }
    }

    pub fn action(&self) -> ChangeAction {
        self.action
    }

    pub fn record_name(&self) -> &str {
        &self.record_name
    }

    pub fn record_type(&self) -> RecordType {
        self.record_type
    }

    pub fn alias_target(&self) -> &AliasTarget {
        &self.alias_target
    }
}

/// All changes for one hosted zone, applied by the provider as a single unit.
///
/// A batch always holds at least one change; the only ways to obtain one are
/// [`ChangeBatch::new`] and [`ChangeBatchBuilder::build`], both of which
/// reject an empty list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeBatch {
    hosted_zone_id: String,
    changes: Vec<ChangeDirective>,
    comment: Option<String>,
}

impl ChangeBatch {
    pub fn new(
        hosted_zone_id: impl Into<String>,
        changes: Vec<ChangeDirective>,
        comment: Option<String>,
    ) -> Result<Self> {
        let hosted_zone_id = hosted_zone_id.into();
        if hosted_zone_id.is_empty() {
            return Err(ZoneBatchError::invalid("hosted zone id cannot be empty"));
        }
        if changes.is_empty() {
            return Err(ZoneBatchError::invalid(
                "a change batch needs at least one change",
            ));
        }

        Ok(Self {
            hosted_zone_id,
            changes,
            comment,
        })
    }

    pub fn hosted_zone_id(&self) -> &str {
        &self.hosted_zone_id
    }

    pub fn changes(&self) -> &[ChangeDirective] {
        &self.changes
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }
}

/// Turns a list of subdomain labels into UPSERT alias records under one suffix.
#[derive(Debug, Clone)]
pub struct ChangeBatchBuilder {
    hosted_zone_id: String,
    domain_suffix: String,
    alias_target: AliasTarget,
    comment: Option<String>,
}

impl ChangeBatchBuilder {
    pub fn new(
        hosted_zone_id: impl Into<String>,
        domain_suffix: impl Into<String>,
        alias_target: AliasTarget,
    ) -> Self {
        Self {
            hosted_zone_id: hosted_zone_id.into(),
            domain_suffix: domain_suffix.into(),
            alias_target,
            comment: None,
        }
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn build<S: AsRef<str>>(&self, subdomains: &[S]) -> Result<ChangeBatch> {
        if subdomains.is_empty() {
            return Err(ZoneBatchError::invalid("subdomain list cannot be empty"));
        }
        validate_suffix(&self.domain_suffix)?;

        let changes = subdomains
            .iter()
            .map(|subdomain| {
                let label = subdomain.as_ref();
                validate_label(label)?;

                let record_name = format!("{}.{}", label, self.domain_suffix);
                let unrooted = record_name.strip_suffix('.').unwrap_or(&record_name);
                if unrooted.len() > MAX_NAME_LEN {
                    return Err(ZoneBatchError::invalid(format!(
                        "record name longer than {} bytes: {:?}",
                        MAX_NAME_LEN, record_name
                    )));
                }

                Ok(ChangeDirective::new(
                    ChangeAction::Upsert,
                    record_name,
                    RecordType::A,
                    self.alias_target.clone(),
                ))
            })
            .collect::<Result<Vec<_>>>()?;

        ChangeBatch::new(self.hosted_zone_id.clone(), changes, self.comment.clone())
    }
}

/// Checks that `suffix` is a dotted name of valid labels, optionally rooted
/// with one trailing dot. Wildcards are only allowed in the subdomain.
fn validate_suffix(suffix: &str) -> Result<()> {
    if suffix.is_empty() {
        return Err(ZoneBatchError::invalid("domain suffix cannot be empty"));
    }

    let unrooted = suffix.strip_suffix('.').unwrap_or(suffix);
    for label in unrooted.split('.') {
        if label == "*" {
            return Err(ZoneBatchError::invalid(format!(
                "domain suffix must not contain a wildcard: {:?}",
                suffix
            )));
        }
        validate_label(label).map_err(|e| {
            ZoneBatchError::invalid(format!("bad domain suffix {:?}: {}", suffix, e))
        })?;
    }

    Ok(())
}

/// Checks that `label` is a single DNS label usable as a subdomain.
pub fn validate_label(label: &str) -> Result<()> {
    if label.is_empty() {
        return Err(ZoneBatchError::invalid("DNS label cannot be empty"));
    }
    if label == "*" {
        return Ok(());
    }
    if label.contains('.') {
        return Err(ZoneBatchError::invalid(format!(
            "DNS label must not contain dots: {:?}",
            label
        )));
    }
    if label.len() > MAX_LABEL_LEN {
        return Err(ZoneBatchError::invalid(format!(
            "DNS label longer than {} bytes: {:?}",
            MAX_LABEL_LEN, label
        )));
    }
    if !label
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ZoneBatchError::invalid(format!(
            "DNS label has characters outside [A-Za-z0-9_-]: {:?}",
            label
        )));
    }
    if label.starts_with('-') || label.ends_with('-') {
        return Err(ZoneBatchError::invalid(format!(
            "DNS label must not start or end with a hyphen: {:?}",
            label
        )));
    }

    Ok(())
}
