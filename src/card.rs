use std::borrow::Cow;

use indexmap::IndexSet;
use itertools::Itertools;
use serde::Serialize;
use serde_json::{Number, Value};

use crate::{
    config::Fields,
    error::{Error, Result},
    raw::{RawCard, RawFields},
};

pub const SCRYFALL_URI_PREFIX: &str = "https://scryfall.com/";
pub const SCRYFALL_URI_SUFFIX: &str = "?utm_source=api";
pub const IMAGE_URI_PREFIX: &str = "https://cards.scryfall.io/normal/";

/// Legality states that still allow a card to be played in a format.
const PLAYABLE_LEGALITIES: &[&str] = &["legal", "restricted"];

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Face {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_line: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oracle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flavor_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<String>,
}

impl Face {
    pub(crate) fn project(src: &RawCard, fields: Fields) -> Result<Self> {
        let mut face = Self {
            name: src.optional_str("name")?.map(str::to_owned),
            type_line: src.optional_str("type_line")?.map(str::to_owned),
            cost: src.optional_str("mana_cost")?.map(str::to_owned),
            img: image(src)?,
            flavor_name: src
                .optional_str("flavor_name")?
                .filter(|name| !name.is_empty())
                .map(str::to_owned),
            ..Default::default()
        };

        if fields.oracle_text {
            face.oracle = src.optional_str("oracle_text")?.map(str::to_owned);
        }

        if fields.colors {
            face.colors = src.optional_joined("colors")?;
        }

        Ok(face)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CardFaces {
    /// Face fields are inlined into the card.
    Single(Face),
    Multiple { faces: Vec<Face> },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessedCard {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cmc: Option<Number>,
    pub sfuri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rarities: Option<IndexSet<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formats: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<String>,
    #[serde(flatten)]
    pub faces: CardFaces,
}

impl ProcessedCard {
    /// Projects the fields selected by `fields` out of a card record.
    ///
    /// `scryfall_uri` is required, every other field is copied only if the
    /// record has it.
    pub fn project(src: &RawCard, fields: Fields) -> Result<Self> {
        let sfuri = src.required_str("scryfall_uri")?;
        let sfuri = sfuri.strip_prefix(SCRYFALL_URI_PREFIX).unwrap_or(sfuri);
        let sfuri = sfuri.strip_suffix(SCRYFALL_URI_SUFFIX).unwrap_or(sfuri);

        let faces = match src.optional_array("card_faces")? {
            Some(faces) => CardFaces::Multiple {
                faces: faces
                    .iter()
                    .map(|face| match face {
                        Value::Object(face) => Face::project(face, fields),
                        _ => Err(Error::InvalidField {
                            card: src.label(),
                            field: "card_faces",
                            expected: "an array of objects",
                        }),
                    })
                    .collect::<Result<Vec<_>>>()?,
            },
            None => {
                // Image and colors of single faced cards live on the card.
                let face = Face::project(src, fields)?;
                CardFaces::Single(Face {
                    img: None,
                    colors: None,
                    ..face
                })
            }
        };

        let mut card = Self {
            cmc: src.optional_number("cmc")?.cloned(),
            sfuri: sfuri.to_owned(),
            img: image(src)?,
            rarities: None,
            formats: None,
            identity: None,
            colors: None,
            faces,
        };

        if fields.rarities {
            let rarity = src.optional_str("rarity")?;
            card.rarities = Some(rarity.map(str::to_owned).into_iter().collect());
        }

        if fields.formats {
            card.formats = formats(src)?;
        }

        if fields.identity {
            card.identity = src.optional_joined("color_identity")?;
        }

        if fields.colors {
            card.colors = src.optional_joined("colors")?;
        }

        Ok(card)
    }

    /// The name cards are ordered by: the card's own name, or
    /// `"<front> // <back>"` for cards with multiple faces.
    pub fn sort_name(&self) -> Result<Cow<'_, str>> {
        match &self.faces {
            CardFaces::Single(Face {
                name: Some(name), ..
            }) if !name.is_empty() => Ok(Cow::Borrowed(name)),
            CardFaces::Single(_) => Err(self.missing("name")),
            CardFaces::Multiple { faces } => match faces.as_slice() {
                [Face {
                    name: Some(front), ..
                }, Face {
                    name: Some(back), ..
                }, ..] => Ok(Cow::Owned(format!("{front} // {back}"))),
                _ => Err(self.missing("card_faces.name")),
            },
        }
    }

    pub(crate) fn add_rarity(&mut self, rarity: &str) {
        if let Some(rarities) = self.rarities.as_mut() {
            if !rarities.contains(rarity) {
                rarities.insert(rarity.to_owned());
            }
        }
    }

    fn missing(&self, field: &'static str) -> Error {
        Error::MissingField {
            card: format!("at {}", self.sfuri),
            field,
        }
    }
}

fn image(src: &RawCard) -> Result<Option<String>> {
    let Some(uris) = src.optional_object("image_uris")? else {
        return Ok(None);
    };

    let normal = uris.optional_str("normal")?.ok_or_else(|| Error::MissingField {
        card: src.label(),
        field: "image_uris.normal",
    })?;

    Ok(Some(
        normal
            .strip_prefix(IMAGE_URI_PREFIX)
            .unwrap_or(normal)
            .to_owned(),
    ))
}

fn formats(src: &RawCard) -> Result<Option<Vec<String>>> {
    let Some(legalities) = src.optional_object("legalities")? else {
        return Ok(None);
    };

    Ok(Some(
        legalities
            .iter()
            .filter(|(_, legality)| {
                legality
                    .as_str()
                    .is_some_and(|legality| PLAYABLE_LEGALITIES.contains(&legality))
            })
            .map(|(format, _)| format.clone())
            .collect_vec(),
    ))
}
