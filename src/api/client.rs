use super::models::ChangeInfo;
use super::{GatewayClient, Route53Client};
use crate::batch::ChangeBatch;
use crate::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait DnsApiClient {
    /// Submits every change in `batch` as one atomic request against its hosted zone.
    async fn change_resource_record_sets(&self, batch: &ChangeBatch) -> Result<ChangeInfo>;
}

/// The client picked by configuration.
pub enum ProviderClient {
    Route53(Route53Client),
    Gateway(GatewayClient),
}

#[async_trait]
impl DnsApiClient for ProviderClient {
    async fn change_resource_record_sets(&self, batch: &ChangeBatch) -> Result<ChangeInfo> {
        match self {
            Self::Route53(client) => client.change_resource_record_sets(batch).await,
            Self::Gateway(client) => client.change_resource_record_sets(batch).await,
        }
    }
}
