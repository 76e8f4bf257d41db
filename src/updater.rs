use log::{debug, info};

use crate::api::models::{DnsRecord, DnsRecordUpdate, Zone};
use crate::api::DnsApiClient;
use crate::error::{Result, UpdateError};

/// Sub-domain label that addresses the zone apex.
pub const APEX: &str = "@";

const A_RECORD: &str = "A";

/// Validated input of one run: which A record to point where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTarget {
    pub domain: String,
    pub sub_domain: String,
    pub ip: String,
}

impl UpdateTarget {
    /// `<sub_domain>.<domain>`, or the bare domain for the apex.
    pub fn fqdn(&self) -> String {
        if self.sub_domain == APEX {
            self.domain.clone()
        } else {
            format!("{}.{}", self.sub_domain, self.domain)
        }
    }
}

/// What the command line asked for, before any zone is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateRequest {
    /// Domain and sub-domain given separately.
    Split(UpdateTarget),
    /// A fully-qualified name; its zone is the longest zone name it ends in.
    Fqdn { name: String, ip: String },
}

pub struct RecordUpdater<C> {
    client: C,
}

impl<C: DnsApiClient> RecordUpdater<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    #[cfg(test)]
    pub fn client(&self) -> &C {
        &self.client
    }

    /// First zone whose name equals `domain` exactly.
    pub async fn resolve_zone(&self, domain: &str) -> Result<Zone> {
        let zones = self.client.list_zones().await?;
        debug!("Provider returned {} zones", zones.len());

        zones
            .into_iter()
            .find(|zone| zone.name == domain)
            .ok_or_else(|| UpdateError::ZoneNotFound {
                domain: domain.to_string(),
            })
    }

    /// Walks the labels of `name` from the left and picks the first suffix that
    /// is a zone of the account. The labels left of it become the sub-domain.
    pub async fn resolve_fqdn(&self, name: &str, ip: &str) -> Result<(Zone, UpdateTarget)> {
        let zones = self.client.list_zones().await?;
        let labels: Vec<&str> = name.split('.').collect();

        for i in 0..labels.len() {
            let candidate = labels[i..].join(".");
            if let Some(zone) = zones.iter().find(|zone| zone.name == candidate) {
                let sub_domain = if i == 0 {
                    APEX.to_string()
                } else {
                    labels[..i].join(".")
                };
                debug!("{} is {} in zone {}", name, sub_domain, zone.name);

                let target = UpdateTarget {
                    domain: candidate,
                    sub_domain,
                    ip: ip.to_string(),
                };
                return Ok((zone.clone(), target));
            }
        }

        Err(UpdateError::ZoneNotFound {
            domain: name.to_string(),
        })
    }

    /// First A record of the zone named exactly like the target's FQDN.
    pub async fn resolve_record(&self, zone: &Zone, target: &UpdateTarget) -> Result<DnsRecord> {
        let fqdn = target.fqdn();
        let records = self.client.list_records(&zone.id).await?;

        let mut matches = records
            .into_iter()
            .filter(|record| record.r#type == A_RECORD && record.name == fqdn);
        let record = matches.next().ok_or_else(|| UpdateError::RecordNotFound {
            sub_domain: target.sub_domain.clone(),
        })?;

        let others = matches.count();
        if others > 0 {
            debug!(
                "{} further A records named {} ignored, using {}",
                others, fqdn, record.id
            );
        }

        Ok(record)
    }

    pub async fn update_record(
        &self,
        zone: &Zone,
        record: &DnsRecord,
        target: &UpdateTarget,
    ) -> Result<DnsRecord> {
        let update = DnsRecordUpdate::a_record(target.fqdn(), target.ip.as_str());
        info!(
            "Updating record {} in zone {}: {} -> {}",
            record.id, zone.id, record.content, update.content
        );

        Ok(self
            .client
            .update_record(&zone.id, &record.id, &update)
            .await?)
    }

    /// Resolves the zone, then the record, then writes the new address.
    pub async fn run(&self, target: &UpdateTarget) -> Result<DnsRecord> {
        let zone = self.resolve_zone(&target.domain).await?;
        info!("Resolved zone {} ({})", zone.name, zone.id);

        self.update_in_zone(&zone, target).await
    }

    pub async fn run_request(&self, request: &UpdateRequest) -> Result<DnsRecord> {
        match request {
            UpdateRequest::Split(target) => self.run(target).await,
            UpdateRequest::Fqdn { name, ip } => {
                let (zone, target) = self.resolve_fqdn(name, ip).await?;
                info!("Resolved zone {} ({}) for {}", zone.name, zone.id, name);

                self.update_in_zone(&zone, &target).await
            }
        }
    }

    async fn update_in_zone(&self, zone: &Zone, target: &UpdateTarget) -> Result<DnsRecord> {
        let record = self.resolve_record(zone, target).await?;
        info!("Resolved record {} ({})", record.name, record.id);

        self.update_record(zone, &record, target).await
    }
}
