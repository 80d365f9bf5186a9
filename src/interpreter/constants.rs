// Constants for the Befunge-93 interpreter

/// Default ceiling on fetch-dispatch-advance cycles per run
pub const DEFAULT_STEP_LIMIT: u64 = 1_000_000;

/// Default memory budget for recorded history (256 MB)
pub const DEFAULT_SNAPSHOT_MEMORY_LIMIT: usize = 256 * 1024 * 1024;

/// Character that ends execution when reached outside string mode
pub const TERMINATOR: char = '@';
