//! # CLI Layer
//!
//! One possible UI client for recipebox. This is the only place that knows about
//! terminal I/O, argument parsing and exit codes.
//!
//! - [`commands`]: `run()` plus one `handle_*` function per subcommand
//! - `setup`: clap definitions
//! - `render`: template-based output (recipe lists, pagination, messages)
//! - `styles` / `templates`: the theme and the template sources
//! - `logging`: tracing subscriber installation

pub mod commands;
mod logging;
mod render;
mod setup;
mod styles;
mod templates;

pub use commands::run;
