/// Name shared by the binary, the config file and the environment prefix
pub const APP_NAME: &str = "recur";
pub const ENV_PREFIX: &str = const_str::convert_ascii_case!(upper, APP_NAME);
pub const CONFIG_FILE: &str = const_str::concat!(APP_NAME, ".toml");

/// ISO calendar date rendering, used for exported options.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// One full Gregorian cycle. Every calendar-field pattern repeats within it.
pub const DEFAULT_MAX_SCAN_DAYS: u32 = 146_097;

pub const DEFAULT_REFERENCE_ZONE: &str = "UTC";
