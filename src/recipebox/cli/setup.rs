use clap::{Parser, Subcommand};
use recipebox::model::RecipeId;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "recipebox", bin_name = "recipebox", version)]
#[command(about = "Keep a catalog of recipes on your own machine", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, help_heading = "Options")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, help_heading = "Options")]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Core(CoreCommands),

    #[command(flatten)]
    Recipe(RecipeCommands),

    #[command(flatten)]
    Data(DataCommands),

    #[command(flatten)]
    Misc(MiscCommands),
}

#[derive(Subcommand, Debug)]
pub enum CoreCommands {
    /// Add a recipe
    #[command(alias = "a", display_order = 1)]
    Add {
        /// Ingredients, free text
        #[arg(short, long, default_value = "")]
        ingredients: String,

        /// Instructions, free text
        #[arg(short = 's', long, default_value = "")]
        instructions: String,

        /// Picture to attach
        #[arg(long, value_name = "PATH")]
        image: Option<PathBuf>,

        /// Title words (joined with spaces)
        #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
        title: Vec<String>,
    },

    /// List recipes, one page at a time
    #[command(alias = "ls", display_order = 2)]
    List {
        /// Page to show (starting at 1)
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },

    /// Search titles and ingredients
    #[command(display_order = 3)]
    Search {
        /// Query words (joined with spaces, case-insensitive)
        #[arg(num_args = 0..)]
        query: Vec<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum RecipeCommands {
    /// Show a recipe in full
    #[command(alias = "v", display_order = 10)]
    View { id: RecipeId },

    /// Change a recipe's text fields
    #[command(alias = "e", display_order = 11)]
    Edit {
        id: RecipeId,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New ingredients
        #[arg(short, long)]
        ingredients: Option<String>,

        /// New instructions
        #[arg(short = 's', long)]
        instructions: Option<String>,

        /// Attach a new picture (not supported, the current one is kept)
        #[arg(long, value_name = "PATH")]
        image: Option<PathBuf>,
    },

    /// Delete a recipe
    #[command(alias = "rm", display_order = 12)]
    Delete { id: RecipeId },
}

#[derive(Subcommand, Debug)]
pub enum DataCommands {
    /// Write the catalog as a JSON array (stdout when no path is given)
    #[command(display_order = 20)]
    Export {
        /// File to write
        path: Option<PathBuf>,
    },

    /// Add recipes from a JSON array, such as a previous export
    #[command(display_order = 21)]
    Import {
        /// File to read
        path: PathBuf,
    },
}

#[derive(Subcommand, Debug)]
pub enum MiscCommands {
    /// Get or set configuration
    #[command(display_order = 30)]
    Config {
        /// Configuration key (e.g., page-size)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
