use std::collections::HashMap;

use indexmap::IndexMap;

use crate::{
    card::ProcessedCard,
    config::Config,
    error::Result,
    raw::{RawCard, RawFields},
};

/// Cards collected during a single [`transform`] run.
///
/// Every card lives in `cards` and is referred to by its index from the
/// other collections, so one card can at the same time be pending and be
/// indexed for rarity aggregation.
#[derive(Debug, Default)]
struct Collected {
    cards: Vec<ProcessedCard>,
    /// Cards with a paper printing, in the order they were found to have one.
    physical: Vec<usize>,
    /// Digital cards waiting for a paper printing, by oracle id.
    digital: IndexMap<String, usize>,
    /// Every kept card by oracle id, only filled when aggregating rarities.
    by_oracle_id: HashMap<String, usize>,
}

impl Collected {
    fn push(&mut self, card: ProcessedCard) -> usize {
        self.cards.push(card);
        self.cards.len() - 1
    }

    fn into_physical(self) -> Vec<ProcessedCard> {
        let mut cards = self.cards.into_iter().map(Some).collect::<Vec<_>>();
        self.physical
            .into_iter()
            .filter_map(|idx| cards[idx].take())
            .collect()
    }
}

/// Builds the card list out of the "Oracle Cards" dump, then uses the
/// "Default Cards" dump to find paper printings of digital cards and to
/// collect the rarities of all printings.
pub fn transform(
    oracle_cards: &[RawCard],
    default_cards: &[RawCard],
    config: &Config,
) -> Result<Vec<ProcessedCard>> {
    let mut collected = Collected::default();

    for src in oracle_cards {
        if is_excluded(src, config)? {
            continue;
        }

        let card = ProcessedCard::project(src, config.fields)?;
        let digital = src.required_bool("digital")?;

        let oracle_id = if digital {
            Some(src.required_str("oracle_id")?)
        } else {
            // Reversible cards only have oracle ids on their faces.
            src.optional_str("oracle_id")?
        };

        let idx = collected.push(card);

        if digital {
            if let Some(oracle_id) = oracle_id {
                debug!("Holding back digital card {}", src.label());
                collected.digital.insert(oracle_id.to_owned(), idx);
            }
        } else {
            collected.physical.push(idx);
        }

        if config.fields.rarities {
            if let Some(oracle_id) = oracle_id {
                collected.by_oracle_id.insert(oracle_id.to_owned(), idx);
            }
        }
    }

    info!(
        "Kept {} paper and {} digital oracle cards",
        collected.physical.len(),
        collected.digital.len()
    );

    let mut promoted = 0;
    for src in default_cards {
        let Some(oracle_id) = src.optional_str("oracle_id")? else {
            continue;
        };

        if src.required_bool("digital")? {
            continue;
        }

        if let Some(idx) = collected.digital.shift_remove(oracle_id) {
            debug!("Found paper printing of digital card {}", src.label());
            collected.physical.push(idx);
            promoted += 1;
        }

        if config.fields.rarities {
            if let Some(&idx) = collected.by_oracle_id.get(oracle_id) {
                if let Some(rarity) = src.optional_str("rarity")? {
                    collected.cards[idx].add_rarity(rarity);
                }
            }
        }
    }

    info!(
        "Promoted {} digital cards, dropped {} digital-only cards",
        promoted,
        collected.digital.len()
    );
    for oracle_id in collected.digital.keys() {
        debug!("Dropping digital-only card with oracle id {}", oracle_id);
    }

    Ok(collected.into_physical())
}

/// [`transform`] with the default [`Config`].
pub fn transform_default(
    oracle_cards: &[RawCard],
    default_cards: &[RawCard],
) -> Result<Vec<ProcessedCard>> {
    transform(oracle_cards, default_cards, &Config::default())
}

fn is_excluded(src: &RawCard, config: &Config) -> Result<bool> {
    if config.excludes_set_type(src.required_str("set_type")?) {
        return Ok(true);
    }

    if config.excludes_layout(src.required_str("layout")?) {
        return Ok(true);
    }

    Ok(src
        .optional_str("set")?
        .is_some_and(|set| config.excludes_set(set)))
}
