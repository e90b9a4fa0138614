use std::path::PathBuf;

use bubbleup::{
    App, DataDirectory, Item, KeybindingsConfig, ReorderField, ReorderList, Theme, init_logging,
};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "bubbleup")]
#[command(about = "Reorder a list of items in the terminal")]
struct Args {
    /// Items to reorder, in their initial order
    items: Vec<String>,

    /// Title shown above the list
    #[arg(short, long, default_value = "Reorder the list")]
    title: String,

    /// Color theme
    #[arg(long, default_value = "base16", value_parser = Theme::NAMES)]
    theme: String,

    /// Hide the key help line
    #[arg(long)]
    no_help: bool,

    /// Exit as soon as the list is submitted
    #[arg(long)]
    exit_on_submit: bool,

    /// Write the default keybindings.yaml to the data directory and exit
    #[arg(long)]
    init_keybindings: bool,

    /// Path to the data directory (default: ~/.bubbleup/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = DataDirectory::new(args.data_dir.unwrap_or_else(DataDirectory::default_path));

    if args.init_keybindings {
        KeybindingsConfig::default().save(&data_dir)?;
        println!("Wrote {}", data_dir.keybindings_path().display());
        return Ok(());
    }

    init_logging(&data_dir, &args.log_level)?;

    let items = args.items.into_iter().map(Item::same).collect();
    let list = ReorderList::new(args.title, items).with_help(!args.no_help);
    let field = ReorderField::new(list)
        .with_keybindings(KeybindingsConfig::load_or_default(&data_dir))
        .with_theme(Theme::by_name(&args.theme).unwrap_or_default());

    let mut app = App::new(field).exit_on_submit(args.exit_on_submit);

    ratatui::run(|terminal| app.run(terminal))?;

    tracing::info!("Application shutting down");

    if let Err(err) = ratatui::try_restore() {
        tracing::error!("Failed to restore terminal: {err}");
    }

    if let Some(line) = app.submitted_line() {
        println!("{line}");
    }

    Ok(())
}
