use clap::Parser;
use imglink::{settings, Cli, Command, Vault};

fn main() -> std::io::Result<()> {
    let cli = Cli::parse();
    let vault = Vault::open(imglink::vault_path(cli.vault.as_deref()))?;
    let settings_path = imglink::settings_path(cli.settings.as_deref());
    let settings = settings::load(&settings_path)?;

    match cli.command {
        Command::Rename {
            note,
            prefix,
            yes,
            dry_run,
        } => cmd::rename::run(&vault, &settings, &note, prefix, yes, dry_run),
        Command::ToMarkdown { note } => {
            cmd::convert::run(&vault, &note, imglink::LinkFormat::Markdown)
        }
        Command::ToWiki { note } => cmd::convert::run(&vault, &note, imglink::LinkFormat::Wiki),
        Command::Links { note } => cmd::links::run(&vault, &note),
        Command::Config { key, value } => cmd::config::run(&settings_path, key, value),
    }
}

mod cmd {
    pub mod config;
    pub mod convert;
    pub mod links;
    pub mod rename;
}
