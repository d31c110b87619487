pub const DEFAULT_OUTPUT_FORMAT: &str = "yaml";
pub const DEFAULT_SNAPPY: bool = false;
pub const DEFAULT_VERBOSITY: &str = "3";
