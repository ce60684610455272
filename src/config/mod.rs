mod manager;

pub use manager::{
    ConfigFile, ConfigManager, DEFAULT_API_KEY_ENV, DEFAULT_ENDPOINT, PolytlConfig,
    ResolveOptions, ResolvedConfig, resolve_config,
};
