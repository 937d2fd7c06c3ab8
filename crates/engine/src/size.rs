//! Byte-count formatting for reports.
//!
//! Sizes are kept as `u64` bytes everywhere; floating point only appears
//! here, at the display boundary.

pub const MIB: f64 = 1024.0 * 1024.0;
pub const GIB: f64 = MIB * 1024.0;

pub fn to_mib(bytes: u64) -> f64 {
    bytes as f64 / MIB
}

pub fn to_gib(bytes: u64) -> f64 {
    bytes as f64 / GIB
}

/// `bytes` in gibibytes, two decimals, labelled `GB`.
pub fn format_gib(bytes: u64) -> String {
    format!("{:.2} GB", to_gib(bytes))
}

/// `bytes` in mebibytes, two decimals, labelled `MB`.
pub fn format_mib(bytes: u64) -> String {
    format!("{:.2} MB", to_mib(bytes))
}
