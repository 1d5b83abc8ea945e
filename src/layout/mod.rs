mod export;
mod report;


pub use export::{GroupMark, export_text, format_capacity, group_marks};
pub use report::{GroupReport, LayoutReport, fingerprint};

/// Width of the rule lines in the text export
pub const RULE_WIDTH: usize = 60;
