use super::models::*;
use anyhow::Result;
use async_trait::async_trait;

/// The three provider calls the updater relies on.
#[async_trait]
pub trait DnsApiClient {
    /// Every zone visible to the authenticated account, in provider order.
    async fn list_zones(&self) -> Result<Vec<Zone>>;

    /// Every DNS record of the zone, in provider order.
    async fn list_records(&self, zone_id: &str) -> Result<Vec<DnsRecord>>;

    async fn update_record(
        &self,
        zone_id: &str,
        record_id: &str,
        update: &DnsRecordUpdate,
    ) -> Result<DnsRecord>;
}
