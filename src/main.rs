use anyhow::Context;
use clap::Parser;
use hacktrack_deck::config::DeckConfig;
use hacktrack_deck::{content, logging};
use std::path::PathBuf;
use tracing::info;

/// Generate the HackTrack pitch deck as a .pptx file.
#[derive(Parser)]
#[command(name = "hacktrack-deck", version, about)]
struct Args {
    /// Path to the deck configuration file
    #[arg(short, long, default_value = "deck.toml")]
    config: PathBuf,

    /// Where to write the .pptx file (overrides the configured path)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let mut config = DeckConfig::load_or_default(&args.config)
        .with_context(|| format!("failed to load config from {}", args.config.display()))?;
    if let Some(output) = args.output {
        config.output.path = output;
    }

    info!(slides = 11, "building HackTrack deck");
    let pres = content::build_deck(&config);

    pres.save(&config.output.path)
        .with_context(|| format!("failed to write {}", config.output.path.display()))?;

    println!("✅ Presentation created successfully!");
    println!("📁 Saved as: {}", config.output.path.display());
    println!();
    println!("📝 Next steps:");
    println!("1. Open the .pptx file");
    println!("2. Take screenshots of your website");
    println!("3. Insert screenshots where marked");
    println!("4. Customize deck.toml with your details");

    Ok(())
}
