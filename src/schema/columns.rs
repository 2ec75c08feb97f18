//! Column names as constants for type safety

/// Elapsed seconds (independent variable)
pub const SECOND: &str = "Second";
/// Raw byte rate as written by the measuring client
pub const RATE_BYTES: &str = "RateBytes";
/// Byte rate converted to mebibytes per second
pub const RATE_MBPS: &str = "RateMBps";
