use log::{debug, error, info};

use crate::api::models::{ChangeInfo, ChangeResourceRecordSetsRequest};
use crate::api::{DnsApiClient, GatewayClient, ProviderClient, Route53Client};
use crate::batch::{ChangeBatch, ChangeBatchBuilder};
use crate::config::Config;
use crate::error::{Result, ZoneBatchError};

pub struct DnsMigration<C> {
    config: Config,
    client: C,
}

impl DnsMigration<ProviderClient> {
    /// Builds the provider client from the explicit settings in `config`.
    pub fn from_config(config: Config) -> Result<Self> {
        let client = match (&config.aws, &config.gateway) {
            (_, Some(gateway)) => ProviderClient::Gateway(GatewayClient::new(
                gateway.endpoint.clone(),
                gateway.api_token.clone(),
            )),
            (Some(aws), None) => ProviderClient::Route53(Route53Client::new(
                aws.credentials(),
                aws.region.clone(),
                aws.endpoint_url.clone(),
            )),
            (None, None) => {
                return Err(ZoneBatchError::invalid(
                    "no provider configured: set `aws` or `gateway`",
                ))
            }
        };
        Ok(Self::new(config, client))
    }
}

impl<C: DnsApiClient> DnsMigration<C> {
    pub fn new(config: Config, client: C) -> Self {
        Self { config, client }
    }

    #[cfg(test)]
    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn build_batch(&self) -> Result<ChangeBatch> {
        let mut builder = ChangeBatchBuilder::new(
            self.config.hosted_zone_id.clone(),
            self.config.domain_suffix.clone(),
            self.config.alias_target.clone().into(),
        );
        if let Some(comment) = &self.config.comment {
            builder = builder.comment(comment.clone());
        }

        builder.build(&self.config.subdomains)
    }

    /// Builds the batch and submits it once. Returns `None` on a dry run.
    pub async fn run(&self) -> Result<Option<ChangeInfo>> {
        let batch = self.build_batch()?;

        info!(
            "Prepared {} change(s) for hosted zone {}",
            batch.changes().len(),
            batch.hosted_zone_id()
        );
        for change in batch.changes() {
            info!(
                "{:?} {:?} {} -> {}",
                change.action(),
                change.record_type(),
                change.record_name(),
                change.alias_target().dns_name
            );
        }

        if self.config.dry_run {
            let body =
                serde_json::to_string_pretty(&ChangeResourceRecordSetsRequest::from(&batch))?;
            info!("Dry run, not submitting. Request body:\n{}", body);
            return Ok(None);
        }

        match self.client.change_resource_record_sets(&batch).await {
            Ok(change_info) => {
                info!(
                    "Change {} submitted, status {:?}",
                    change_info.id, change_info.status
                );
                debug!("Change info: {:?}", change_info);
                Ok(Some(change_info))
            }
            Err(e) => {
                error!("Failed to submit change batch: {}", e);
                Err(e)
            }
        }
    }
}
