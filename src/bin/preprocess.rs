use anyhow::{bail, Context};

use card_preprocess::{load_dump, transform, write_sorted, Config, OUTPUT_FILE};

fn main() -> anyhow::Result<()> {
    let (writer, _guard) = tracing_appender::non_blocking(std::io::stderr());
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_ansi(false)
        .with_target(false)
        .with_writer(writer)
        .init();

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let [oracle_path, default_path] = args.as_slice() else {
        bail!("Usage: preprocess <oracle-cards.json> <default-cards.json>");
    };

    // First argument should be the Scryfall "Oracle Cards" bulk dump.
    let oracle_cards = load_dump(oracle_path)
        .with_context(|| format!("Loading oracle cards: {oracle_path}"))?;
    // Second argument should be the Scryfall "Default Cards" bulk dump.
    let default_cards = load_dump(default_path)
        .with_context(|| format!("Loading default cards: {default_path}"))?;

    let cards = transform(&oracle_cards, &default_cards, &Config::default())
        .context("Processing cards")?;

    write_sorted(OUTPUT_FILE, cards).with_context(|| format!("Writing {OUTPUT_FILE}"))?;

    Ok(())
}
