//! Available subcommands.

use clap::Subcommand;

/// Operations provided by the hfup tool.
#[derive(Subcommand)]
pub enum Commands {
    /// Install the hf CLI into an isolated Python environment
    Install {
        /// Recreate the environment even if it already exists
        #[arg(short, long)]
        force: bool,
        /// Do not edit the shell rc file to put the bin directory on PATH
        #[arg(long)]
        no_modify_path: bool,
        /// Also install the transformers package
        #[arg(long)]
        with_transformers: bool,
    },

    /// Remove the installed hf CLI and its environment
    Uninstall {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Show what is currently installed
    Status,

    /// Show resolved paths for all hfup locations
    Paths,

    /// Render a library usage snippet for a model
    Snippet {
        /// Model repository id (e.g. "openai-community/gpt2")
        model_id: String,
        /// Library to render the snippet for
        #[arg(short, long, default_value = "transformers")]
        library: String,
        /// The model's pipeline tag (task), if known
        #[arg(long)]
        pipeline_tag: Option<String>,
        /// Hub tags influencing snippet dispatch (repeatable)
        #[arg(short, long, action = clap::ArgAction::Append)]
        tag: Vec<String>,
    },

    /// List documented tasks, or show one in detail
    Tasks {
        /// Task id (e.g. "text-classification")
        id: Option<String>,
    },
}
