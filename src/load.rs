use std::path::Path;

use crate::{
    error::{Error, Result},
    raw::RawCard,
};

/// Reads a whole bulk data dump, a JSON array of card objects, into memory.
pub fn load_dump(path: impl AsRef<Path>) -> Result<Vec<RawCard>> {
    let path = path.as_ref();

    let timer = std::time::Instant::now();
    let contents = std::fs::read(path).map_err(|source| Error::io(path, source))?;

    let cards: Vec<RawCard> =
        serde_json::from_slice(&contents).map_err(|source| Error::Parse {
            path: path.display().to_string(),
            source,
        })?;

    info!(
        "Loaded {} cards from {} in {}ms",
        cards.len(),
        path.display(),
        timer.elapsed().as_millis()
    );

    Ok(cards)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn loads_array_of_cards() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("oracle-cards.json");
        std::fs::write(
            &path,
            r#"[{"name": "Æther Vial", "digital": false}, {"name": "Island"}]"#,
        )?;

        let cards = load_dump(&path)?;

        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0]["name"], "Æther Vial");
        assert_eq!(cards[1]["name"], "Island");

        Ok(())
    }

    #[test]
    fn missing_file_is_not_found() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;

        let err = load_dump(dir.path().join("default-cards.json")).unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));

        Ok(())
    }

    #[test]
    fn invalid_json_is_a_parse_error() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;

        let truncated = dir.path().join("truncated.json");
        std::fs::write(&truncated, r#"[{"name": "Island""#)?;
        assert!(matches!(
            load_dump(&truncated).unwrap_err(),
            Error::Parse { .. }
        ));

        let not_cards = dir.path().join("not_cards.json");
        std::fs::write(&not_cards, r#"[1, 2, 3]"#)?;
        assert!(matches!(
            load_dump(&not_cards).unwrap_err(),
            Error::Parse { .. }
        ));

        Ok(())
    }
}
