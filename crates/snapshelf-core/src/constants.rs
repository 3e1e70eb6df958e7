/// Maximum length of an item name accepted at the request boundary.
pub const MAX_ITEM_NAME_LEN: usize = 255;

/// Identifier of the built-in lookup-table strategy.
pub const RULE_BASED_STRATEGY: &str = "rule_based";

/// Environment variable consulted by `tracing_setup::init_tracing`.
pub const LOG_ENV_VAR: &str = "SNAPSHELF_LOG";

/// Default project config file name.
pub const CONFIG_FILENAME: &str = "snapshelf.toml";
