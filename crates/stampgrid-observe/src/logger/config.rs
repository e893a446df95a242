use std::io::IsTerminal;

use crate::logger::format::LoggerFormat;

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub format: LoggerFormat,
    /// `EnvFilter` directive, e.g. `info` or `stampgrid_core=debug,info`.
    pub level: String,
    pub with_targets: bool,
    pub use_color: bool,
}

impl LoggerConfig {
    /// Default config with the filter taken from `RUST_LOG` when it is set.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Ok(level) = std::env::var("RUST_LOG")
            && !level.trim().is_empty()
        {
            cfg.level = level;
        }
        cfg
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        let use_color = cfg!(test) || std::io::stdout().is_terminal();
        Self {
            format: LoggerFormat::Text,
            level: "info".to_string(),
            with_targets: true,
            use_color,
        }
    }
}
