//! Command dispatch layer for lazypass.
//!
//! Maps parsed CLI commands to their implementations. Each command lives in
//! its own file and exposes a single `run()` function that writes its
//! report to the given output.

use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::error::Result;
use crate::store::DataFile;

pub mod add;
pub mod count;
pub mod gen_pw;
pub mod get;
pub mod list;

/// Resolved settings every command runs against.
pub struct Context {
    pub config: Config,
    pub store: DataFile,
}

impl Context {
    pub fn new(config: Config) -> Self {
        let store = DataFile::new(config.data_file.clone());
        Self { config, store }
    }

    /// Load the config file and apply command-line overrides on top.
    pub fn resolve(config_path: Option<&Path>, data_file: Option<PathBuf>) -> Result<Self> {
        let mut config = Config::load(config_path)?;
        if let Some(path) = data_file {
            config.data_file = path;
        }
        debug!(data_file = %config.data_file.display(), "resolved data file");
        Ok(Self::new(config))
    }
}

pub fn dispatch(cli: Cli) -> Result<()> {
    let ctx = Context::resolve(cli.config.as_deref(), cli.data_file)?;
    let mut out = io::stdout();

    match cli.command {
        Commands::Add(args) => add::run(&ctx, args, &mut out),
        Commands::Get { website, copy } => get::run(&ctx, &website, copy, &mut out),
        Commands::Gen { length, copy } => gen_pw::run(&ctx, length, copy, &mut out),
        Commands::Count => count::run(&ctx, &mut out),
        Commands::List => list::run(&ctx, &mut out),
    }
}

#[cfg(test)]
pub(crate) fn test_context(dir: &Path) -> Context {
    Context::new(Config {
        data_file: dir.join("data.json"),
        clipboard_clear_secs: 0,
        ..Config::default()
    })
}
