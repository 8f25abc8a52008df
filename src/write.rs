use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use itertools::Itertools;

use crate::{
    card::ProcessedCard,
    error::{Error, Result},
};

pub const OUTPUT_FILE: &str = "cards.json";

/// Stable sort by [`ProcessedCard::sort_name`], comparing code points.
pub fn sort_cards(cards: Vec<ProcessedCard>) -> Result<Vec<ProcessedCard>> {
    let mut keyed = cards
        .into_iter()
        .map(|card| Ok((card.sort_name()?.into_owned(), card)))
        .collect::<Result<Vec<_>>>()?;

    keyed.sort_by(|(lhs, _), (rhs, _)| lhs.cmp(rhs));

    Ok(keyed.into_iter().map(|(_, card)| card).collect_vec())
}

/// Writes `cards` as a single JSON array, replacing whatever was at `path`.
///
/// The file is created before serializing, a failure part way leaves it
/// truncated.
pub fn write_cards(path: impl AsRef<Path>, cards: &[ProcessedCard]) -> Result<()> {
    let path = path.as_ref();

    let file = File::create(path).map_err(|source| write_error(path, source))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer(&mut writer, cards).map_err(|source| Error::Serialize {
        path: path.display().to_string(),
        source,
    })?;
    writer.flush().map_err(|source| write_error(path, source))?;

    info!("Wrote {} cards to {}", cards.len(), path.display());

    Ok(())
}

/// Output failures are always [`Error::Write`], a missing directory included.
fn write_error(path: &Path, source: std::io::Error) -> Error {
    Error::Write {
        path: path.display().to_string(),
        source,
    }
}

pub fn write_sorted(path: impl AsRef<Path>, cards: Vec<ProcessedCard>) -> Result<()> {
    let cards = sort_cards(cards)?;
    write_cards(path, &cards)
}
