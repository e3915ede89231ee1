//! JSONL Deployment Log
//!
//! Append-only record of completed deployments, one file per network:
//! data/deployments/deployments_<network>.jsonl. Repeated runs leave an
//! audit trail of every strategy/vault pair this tool has shipped.
//!
//! Author: AI-Generated
//! Created: 2026-07-31

use crate::types::DeploymentRecord;
use anyhow::{Context, Result};
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

pub struct DeploymentLog {
    base_dir: PathBuf,
}

impl DeploymentLog {
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();

        fs::create_dir_all(&base_dir)
            .with_context(|| format!("Failed to create deployment log dir: {:?}", base_dir))?;

        Ok(Self { base_dir })
    }

    fn file_path(&self, network: &str) -> PathBuf {
        self.base_dir.join(format!("deployments_{}.jsonl", network))
    }

    /// Append a record as a single JSON line.
    pub fn append(&mut self, record: &DeploymentRecord) -> Result<()> {
        let file_path = self.file_path(&record.network);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&file_path)
            .with_context(|| format!("Failed to open deployment log: {:?}", file_path))?;

        let json = serde_json::to_string(record)
            .context("Failed to serialize deployment record")?;

        writeln!(file, "{}", json)?;

        Ok(())
    }

    /// Read all records logged for a network.
    pub fn read_all(&self, network: &str) -> Result<Vec<DeploymentRecord>> {
        let path = self.file_path(network);
        if !path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&path)?;
        let reader = BufReader::new(file);

        let mut records = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let record: DeploymentRecord =
                serde_json::from_str(&line).context("Malformed deployment record line")?;
            records.push(record);
        }

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_record(network: &str) -> DeploymentRecord {
        DeploymentRecord {
            label: "DAI/WETH".to_string(),
            network: network.to_string(),
            chain_id: 31337,
            pool: "0x0f04024bdA15F6e5D48Ed92938654a6449F483ed".to_string(),
            strategy: "0xfbDc20aEFB98a2dD3842023f21D17004eAefbe68".to_string(),
            vault: "0x74D15a18796607EEE439C2259C09a5D6D051Ef87".to_string(),
            current_tick: -73146,
            tick_spacing: 60,
            tick_range_multiplier: 13879,
            init_tx: "0xabc".to_string(),
            deployed_at: Utc::now(),
        }
    }

    #[test]
    fn test_append_and_read_back() {
        let dir = std::env::temp_dir().join(format!("deploy-log-test-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);

        let mut log = DeploymentLog::new(&dir).unwrap();
        log.append(&sample_record("testnet-a")).unwrap();
        log.append(&sample_record("testnet-a")).unwrap();

        let records = log.read_all("testnet-a").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].label, "DAI/WETH");
        assert_eq!(records[1].tick_range_multiplier, 13879);

        // unknown network reads back empty, not an error
        assert!(log.read_all("testnet-b").unwrap().is_empty());

        let _ = fs::remove_dir_all(&dir);
    }
}
