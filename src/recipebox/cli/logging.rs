//! Tracing subscriber setup for the binary.
//!
//! Logs go to stderr so they never mix with rendered output on stdout.
//!
//! Filter priority, highest first:
//! 1. `RECIPEBOX_LOG` (directives such as `recipebox=debug`)
//! 2. `RUST_LOG`
//! 3. CLI flags: `-v` debug, `-q` error
//! 4. Default: warn

use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "RECIPEBOX_LOG";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}

impl Verbosity {
    /// Verbose wins when both flags are given.
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if verbose {
            Self::Verbose
        } else if quiet {
            Self::Quiet
        } else {
            Self::Normal
        }
    }

    fn default_directive(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "debug",
        }
    }
}

/// Installs the global subscriber. Call once, before anything logs.
pub fn init_subscriber(verbosity: Verbosity, no_color: bool) {
    let use_ansi = !no_color && std::io::IsTerminal::is_terminal(&std::io::stderr());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(use_ansi)
        .with_target(true)
        .without_time()
        .compact();

    let _ = tracing_subscriber::registry()
        .with(build_env_filter(verbosity))
        .with(fmt_layer)
        .try_init();
}

fn build_env_filter(verbosity: Verbosity) -> EnvFilter {
    if let Ok(directives) = std::env::var(LOG_ENV) {
        if let Ok(filter) = EnvFilter::try_new(&directives) {
            return filter;
        }
    }

    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    EnvFilter::new(verbosity.default_directive())
}
