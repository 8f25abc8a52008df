#[macro_use]
extern crate tracing;

pub mod card;
pub mod config;
pub mod error;
pub mod load;
pub mod raw;
pub mod transform;
pub mod write;

pub use crate::{
    card::{CardFaces, Face, ProcessedCard},
    config::{Config, Fields},
    error::{Error, Result},
    load::load_dump,
    raw::RawCard,
    transform::{transform, transform_default},
    write::{sort_cards, write_cards, write_sorted, OUTPUT_FILE},
};
