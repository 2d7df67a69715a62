use super::{client::DnsApiClient, models::*};
use crate::batch::ChangeBatch;
use crate::error::{Result, ZoneBatchError};
use async_trait::async_trait;
use log::debug;

const API_VERSION: &str = "2013-04-01";

/// Posts the JSON change-batch body to an HTTP gateway that fronts the DNS API.
pub struct GatewayClient {
    client: reqwest::Client,
    endpoint: String,
    api_token: String,
}

#[async_trait]
impl DnsApiClient for GatewayClient {
    async fn change_resource_record_sets(&self, batch: &ChangeBatch) -> Result<ChangeInfo> {
        let request = ChangeResourceRecordSetsRequest::from(batch);
        let body = serde_json::to_string(&request)?;
        debug!("Request body: {}", body);

        let response = self
            .client
            .post(self.rrset_url(batch.hosted_zone_id()))
            .bearer_auth(&self.api_token)
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(ZoneBatchError::Provider {
                status: status.as_u16(),
                code: None,
                message: text,
            });
        }

        let parsed: ChangeResourceRecordSetsResponse = serde_json::from_str(&text)?;
        Ok(parsed.change_info)
    }
}

impl GatewayClient {
    pub fn new(endpoint: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            api_token: api_token.into(),
        }
    }

    fn rrset_url(&self, hosted_zone_id: &str) -> String {
        format!(
            "{}/{}/hostedzone/{}/rrset",
            self.endpoint.trim_end_matches('/'),
            API_VERSION,
            hosted_zone_id
        )
    }
}
