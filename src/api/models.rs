use serde::{Deserialize, Serialize};

use crate::batch::{AliasTarget, ChangeAction, ChangeBatch, ChangeDirective, RecordType};
use crate::error::ZoneBatchError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChangeResourceRecordSetsRequest {
    pub hosted_zone_id: String,
    pub change_batch: ApiChangeBatch,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApiChangeBatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub changes: Vec<ApiChange>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApiChange {
    pub action: ChangeAction,
    pub resource_record_set: ApiResourceRecordSet,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApiResourceRecordSet {
    pub name: String,
    pub r#type: RecordType,
    pub alias_target: ApiAliasTarget,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiAliasTarget {
    #[serde(rename = "HostedZoneId")]
    pub hosted_zone_id: String,
    #[serde(rename = "DNSName")]
    pub dns_name: String,
    #[serde(rename = "EvaluateTargetHealth")]
    pub evaluate_target_health: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChangeResourceRecordSetsResponse {
    pub change_info: ChangeInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChangeStatus {
    Pending,
    Insync,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChangeInfo {
    pub id: String,
    pub status: ChangeStatus,
    #[serde(default)]
    pub submitted_at: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
}

impl From<&ChangeBatch> for ChangeResourceRecordSetsRequest {
    fn from(batch: &ChangeBatch) -> Self {
        Self {
            hosted_zone_id: batch.hosted_zone_id().to_string(),
            change_batch: ApiChangeBatch {
                comment: batch.comment().map(str::to_string),
                changes: batch.changes().iter().map(ApiChange::from).collect(),
            },
        }
    }
}

impl From<&ChangeDirective> for ApiChange {
    fn from(change: &ChangeDirective) -> Self {
        let alias = change.alias_target();
        Self {
            action: change.action(),
            resource_record_set: ApiResourceRecordSet {
                name: change.record_name().to_string(),
                r#type: change.record_type(),
                alias_target: ApiAliasTarget {
                    hosted_zone_id: alias.hosted_zone_id.clone(),
                    dns_name: alias.dns_name.clone(),
                    evaluate_target_health: alias.evaluate_target_health,
                },
            },
        }
    }
}

// Parsing back goes through ChangeBatch::new so an empty Changes list is rejected.
impl TryFrom<ChangeResourceRecordSetsRequest> for ChangeBatch {
    type Error = ZoneBatchError;

    fn try_from(request: ChangeResourceRecordSetsRequest) -> Result<Self, Self::Error> {
        let changes = request
            .change_batch
            .changes
            .into_iter()
            .map(|change| {
                let rrset = change.resource_record_set;
                ChangeDirective::new(
                    change.action,
                    rrset.name,
                    rrset.r#type,
                    AliasTarget {
                        hosted_zone_id: rrset.alias_target.hosted_zone_id,
                        dns_name: rrset.alias_target.dns_name,
                        evaluate_target_health: rrset.alias_target.evaluate_target_health,
                    },
                )
            })
            .collect();

        ChangeBatch::new(
            request.hosted_zone_id,
            changes,
            request.change_batch.comment,
        )
    }
}
