/// Number of source stamps shown when the caller does not ask for a width.
pub const DEFAULT_WIDTH: i64 = 5;

/// Lower bound for the page refresh interval, in seconds.
pub const MIN_RELOAD_SECS: u64 = 15;

/// Branch parameter value that selects the default (unnamed) branch.
pub const TRUNK_BRANCH: &str = "trunk";
