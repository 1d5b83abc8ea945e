use super::export::{GroupMark, group_marks};
use crate::balancer::PartitionResult;
use crate::cells::PackTopology;
use crate::config::BalancerConfig;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Serializable summary of one balancing run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutReport {
    pub topology: String,
    pub pack_voltage: f64,
    pub pack_capacity: f64,
    pub delta: f64,
    /// Delta exceeded the configured warning threshold
    pub delta_warning: bool,
    pub groups: Vec<GroupReport>,
    /// Hex SHA-256 of the input; equal for identical runs
    pub fingerprint: String,
    pub generated_at: String,
    pub generator: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupReport {
    pub index: usize,
    pub cells: Vec<f64>,
    pub total: f64,
    /// Surplus over the weakest group (mAh)
    pub above_min: f64,
    pub is_min: bool,
    pub is_max: bool,
}

impl LayoutReport {
    pub fn build(
        result: &PartitionResult,
        topology: &PackTopology,
        cells: &[f64],
        config: &BalancerConfig,
    ) -> Self {
        let groups = result
            .groups()
            .iter()
            .zip(group_marks(result))
            .map(|(group, mark)| GroupReport {
                index: group.index(),
                cells: group.members().to_vec(),
                total: group.total(),
                above_min: group.total() - result.min_total(),
                is_min: mark == GroupMark::Min,
                is_max: mark == GroupMark::Max,
            })
            .collect();

        Self {
            topology: topology.to_string(),
            pack_voltage: result.pack_voltage(),
            pack_capacity: result.pack_capacity(),
            delta: result.delta(),
            delta_warning: config.exceeds_warning(result.delta()),
            groups,
            fingerprint: fingerprint(cells, topology.series),
            generated_at: Utc::now().to_rfc3339(),
            generator: format!("cellpack v{}", env!("CARGO_PKG_VERSION")),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Hash the series count and the capacities in input order
pub fn fingerprint(cells: &[f64], series_count: usize) -> String {
    let mut hasher = Sha256::new();
    hasher.update((series_count as u64).to_le_bytes());
    for cap in cells {
        hasher.update(cap.to_bits().to_le_bytes());
    }
    hex::encode(hasher.finalize())
}
