use super::RULE_WIDTH;
use crate::balancer::PartitionResult;
use crate::cells::PackTopology;

/// Where a group sits relative to the weakest and strongest group
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GroupMark {
    /// Weakest group; bounds the pack capacity
    Min,
    /// Strongest group
    Max,
    /// Anything in between, with its surplus over the weakest group (mAh)
    Above(f64),
}

impl GroupMark {
    pub fn label(&self) -> String {
        match self {
            GroupMark::Min => "▼ min".to_string(),
            GroupMark::Max => "▲ max".to_string(),
            GroupMark::Above(surplus) => format!("+{}", format_capacity(*surplus)),
        }
    }
}

/// Mark every group, in group order. Min wins when all totals are equal.
pub fn group_marks(result: &PartitionResult) -> Vec<GroupMark> {
    result
        .groups()
        .iter()
        .map(|group| {
            let total = group.total();
            if total == result.min_total() {
                GroupMark::Min
            } else if total == result.max_total() {
                GroupMark::Max
            } else {
                GroupMark::Above(total - result.min_total())
            }
        })
        .collect()
}

/// Print a capacity without a trailing ".0" when it is integral
pub fn format_capacity(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Plain-text pack layout, one line per group
pub fn export_text(result: &PartitionResult, topology: &PackTopology) -> String {
    let rule = "─".repeat(RULE_WIDTH);
    let mut lines = vec![
        "CELL BALANCER — PACK LAYOUT".to_string(),
        format!(
            "Config: {}  |  Voltage: {:.1}V  |  Capacity: {} mAh  |  Δ: {} mAh",
            topology,
            result.pack_voltage(),
            format_capacity(result.pack_capacity()),
            format_capacity(result.delta())
        ),
        rule.clone(),
    ];

    for group in result.groups() {
        let members: Vec<String> = group.members().iter().map(|c| format_capacity(*c)).collect();
        lines.push(format!(
            "Group {}:  [{}]  →  {} mAh",
            group.index(),
            members.join(", "),
            format_capacity(group.total())
        ));
    }

    lines.push(rule);
    lines.join("\n")
}
