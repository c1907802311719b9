/// Records per batch when batch mode is configured without a size
pub const DEFAULT_BATCH_SIZE: usize = 10;
/// Default `RUST_LOG` filter for the command-line harness
pub const DEFAULT_LOG_FILTER: &str = "faxe_processors=info";
/// `RUST_LOG` filter used with `--verbose`
pub const VERBOSE_LOG_FILTER: &str = "faxe_processors=debug,info";
