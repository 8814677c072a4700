use clap::{Parser, Subcommand};

/// imglink - Rename images linked from Markdown notes
///
/// # Quick Reference
///
/// ## Renaming
///
/// ```bash
/// imglink rename "daily/today.md"          # Prompt for prefix, confirm, rename
/// imglink rename today --prefix zd --yes   # Non-interactive
/// imglink rename today --dry-run           # Show the planned mapping only
/// ```
///
/// ## Syntax Conversion
///
/// ```bash
/// imglink to-markdown today     # ![[a.png|cap]] -> ![cap](a.png)
/// imglink to-wiki today         # ![cap](a.png)  -> ![[a.png|cap]]
/// ```
///
/// ## Inspection
///
/// ```bash
/// imglink links today           # List image references, one per line
/// ```
///
/// ## Settings
///
/// ```bash
/// imglink config                        # Print all settings
/// imglink config dateFormat             # Print one value
/// imglink config dateFormat YYMMDD      # Set and persist
/// ```
///
/// ## Global Options
///
/// ```bash
/// imglink --vault ~/notes rename today     # Explicit vault root
/// imglink --settings ./cfg.json config     # Explicit settings file
/// ```
///
/// ## Environment Variables
///
/// - `IMGLINK_VAULT`: vault root directory (default: current directory)
/// - `IMGLINK_SETTINGS`: settings file path (default: ~/.imglink.json)
#[derive(Parser, Debug)]
#[command(name = "imglink")]
#[command(version = "0.1.0")]
#[command(about = "Rename images linked from Markdown notes and keep every link in sync")]
pub struct Cli {
    /// Vault root directory (default: current directory or $IMGLINK_VAULT)
    #[arg(long, value_name = "PATH", global = true)]
    pub vault: Option<String>,

    /// Settings file (default: ~/.imglink.json or $IMGLINK_SETTINGS)
    #[arg(long, value_name = "FILE", global = true)]
    pub settings: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Rename the images linked from a note and rewrite its links
    #[command(alias = "rn")]
    Rename {
        /// Note name or path, relative to the vault root
        note: String,

        /// Filename prefix (skips the interactive prompt)
        #[arg(short, long)]
        prefix: Option<String>,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,

        /// Print the planned mapping without renaming anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Convert a note's wiki embeds to markdown form
    #[command(alias = "md")]
    ToMarkdown {
        /// Note name or path, relative to the vault root
        note: String,
    },

    /// Convert a note's markdown embeds to wiki form
    #[command(alias = "wiki")]
    ToWiki {
        /// Note name or path, relative to the vault root
        note: String,
    },

    /// List the image references found in a note
    #[command(alias = "ls")]
    Links {
        /// Note name or path, relative to the vault root
        note: String,
    },

    /// Get or set persisted settings
    Config {
        /// Setting key (prefix, useDate, dateFormat, startIndex, padLength, linkFormat)
        key: Option<String>,

        /// New value for the key
        value: Option<String>,
    },
}
