use super::{client::DnsApiClient, models::*};
use crate::config::Credentials;
use anyhow::{Context, Result};
use async_trait::async_trait;
use log::debug;
use serde::de::DeserializeOwned;

pub const API_BASE_URL: &str = "https://api.cloudflare.com/client/v4";

// Largest page size the zones endpoint accepts.
const ZONES_PER_PAGE: u32 = 50;
const RECORDS_PER_PAGE: u32 = 100;

pub struct CloudflareClient {
    client: reqwest::Client,
    credentials: Credentials,
    base_url: String,
}

#[async_trait]
impl DnsApiClient for CloudflareClient {
    async fn list_zones(&self) -> Result<Vec<Zone>> {
        let url = format!("{}/zones", self.base_url);
        self.get_all_pages(&url, ZONES_PER_PAGE)
            .await
            .context("Failed to list zones")
    }

    async fn list_records(&self, zone_id: &str) -> Result<Vec<DnsRecord>> {
        let url = format!("{}/zones/{}/dns_records", self.base_url, zone_id);
        self.get_all_pages(&url, RECORDS_PER_PAGE)
            .await
            .with_context(|| format!("Failed to list DNS records of zone {}", zone_id))
    }

    async fn update_record(
        &self,
        zone_id: &str,
        record_id: &str,
        update: &DnsRecordUpdate,
    ) -> Result<DnsRecord> {
        let url = format!(
            "{}/zones/{}/dns_records/{}",
            self.base_url, zone_id, record_id
        );
        debug!("PATCH {} {:?}", url, update);

        let response = self
            .credentials
            .authorize(self.client.patch(&url))
            .json(update)
            .send()
            .await
            .context("Failed to send DNS record update")?;

        let update_response: ApiResponse<DnsRecord> = Self::read_response(response).await?;

        update_response
            .result
            .ok_or_else(|| anyhow::anyhow!("Update response did not contain the DNS record"))
    }
}

impl CloudflareClient {
    pub fn new(credentials: Credentials, base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            credentials,
            base_url: base_url.into(),
        }
    }

    async fn get_all_pages<T: DeserializeOwned>(
        &self,
        url: &str,
        per_page: u32,
    ) -> Result<Vec<T>> {
        let mut items = Vec::new();
        let mut page = 1u32;

        loop {
            debug!("GET {} page {}", url, page);
            let response = self
                .credentials
                .authorize(self.client.get(url))
                .query(&[("page", page), ("per_page", per_page)])
                .send()
                .await?;

            let parsed: ApiResponse<Vec<T>> = Self::read_response(response).await?;
            items.extend(parsed.result.unwrap_or_default());

            match parsed.result_info {
                Some(info) if page < info.total_pages => page += 1,
                _ => break,
            }
        }

        Ok(items)
    }

    async fn read_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<ApiResponse<T>> {
        let status = response.status();
        let text = response.text().await?;

        let parsed: ApiResponse<T> = serde_json::from_str(&text).map_err(|e| {
            anyhow::anyhow!(
                "Failed to parse API response ({}): {}. Response: {}",
                status,
                e,
                text
            )
        })?;

        if !parsed.success {
            let errors = parsed
                .errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            return Err(anyhow::anyhow!("API request failed ({}): {}", status, errors));
        }

        Ok(parsed)
    }
}
