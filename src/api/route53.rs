use super::{client::DnsApiClient, models::*};
use crate::batch::{self, ChangeBatch, ChangeDirective};
use crate::error::{Result, ZoneBatchError};
use async_trait::async_trait;
use aws_credential_types::Credentials;
use aws_sdk_route53::config::{retry::RetryConfig, BehaviorVersion, Region};
use aws_sdk_route53::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_route53::primitives::DateTimeFormat;
use aws_sdk_route53::types;
use log::debug;

// Route53 is a global service; requests are signed for us-east-1.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Route53 through the AWS SDK, with credentials handed in by the caller.
pub struct Route53Client {
    client: aws_sdk_route53::Client,
}

#[async_trait]
impl DnsApiClient for Route53Client {
    async fn change_resource_record_sets(&self, batch: &ChangeBatch) -> Result<ChangeInfo> {
        let change_batch = to_sdk_batch(batch)?;
        debug!("Route53 change batch: {:?}", change_batch);

        let output = self
            .client
            .change_resource_record_sets()
            .hosted_zone_id(batch.hosted_zone_id())
            .change_batch(change_batch)
            .send()
            .await
            .map_err(|e| match e {
                SdkError::ServiceError(context) => {
                    let status = context.raw().status().as_u16();
                    let err = context.into_err();
                    ZoneBatchError::Provider {
                        status,
                        code: err.code().map(str::to_string),
                        message: err.message().unwrap_or_default().to_string(),
                    }
                }
                other => ZoneBatchError::Transport(DisplayErrorContext(&other).to_string()),
            })?;

        let info = output.change_info().ok_or_else(|| {
            ZoneBatchError::Transport("Route53 response carried no ChangeInfo".to_string())
        })?;

        Ok(ChangeInfo {
            id: info.id().to_string(),
            status: match info.status() {
                types::ChangeStatus::Insync => ChangeStatus::Insync,
                _ => ChangeStatus::Pending,
            },
            submitted_at: info.submitted_at().fmt(DateTimeFormat::DateTime).ok(),
            comment: info.comment().map(str::to_string),
        })
    }
}

impl Route53Client {
    /// `endpoint_url` overrides the AWS endpoint, e.g. for LocalStack.
    pub fn new(
        credentials: Credentials,
        region: impl Into<String>,
        endpoint_url: Option<String>,
    ) -> Self {
        let mut builder = aws_sdk_route53::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(region.into()))
            .credentials_provider(credentials)
            .retry_config(RetryConfig::disabled());
        if let Some(url) = endpoint_url {
            builder = builder.endpoint_url(url);
        }

        Self {
            client: aws_sdk_route53::Client::from_conf(builder.build()),
        }
    }
}

fn to_sdk_batch(batch: &ChangeBatch) -> Result<types::ChangeBatch> {
    let changes = batch
        .changes()
        .iter()
        .map(to_sdk_change)
        .collect::<Result<Vec<_>>>()?;

    Ok(types::ChangeBatch::builder()
        .set_comment(batch.comment().map(str::to_string))
        .set_changes(Some(changes))
        .build()?)
}

fn to_sdk_change(change: &ChangeDirective) -> Result<types::Change> {
    let alias = change.alias_target();
    let alias_target = types::AliasTarget::builder()
        .hosted_zone_id(&alias.hosted_zone_id)
        .dns_name(&alias.dns_name)
        .evaluate_target_health(alias.evaluate_target_health)
        .build()?;

    let record_set = types::ResourceRecordSet::builder()
        .name(change.record_name())
        .r#type(match change.record_type() {
            batch::RecordType::A => types::RrType::A,
            batch::RecordType::Aaaa => types::RrType::Aaaa,
            batch::RecordType::Cname => types::RrType::Cname,
        })
        .alias_target(alias_target)
        .build()?;

    Ok(types::Change::builder()
        .action(match change.action() {
            batch::ChangeAction::Upsert => types::ChangeAction::Upsert,
            batch::ChangeAction::Create => types::ChangeAction::Create,
            batch::ChangeAction::Delete => types::ChangeAction::Delete,
        })
        .resource_record_set(record_set)
        .build()?)
}
