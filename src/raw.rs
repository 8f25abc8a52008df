use itertools::Itertools;
use serde_json::{Map, Number, Value};

use crate::error::{Error, Result};

/// A card record as published in the bulk data dumps. Only a handful of its
/// keys are ever read.
pub type RawCard = Map<String, Value>;

/// Checked access to the fields of a [`RawCard`] (or one of its faces).
pub(crate) trait RawFields {
    /// Human readable identification of the record for error messages.
    fn label(&self) -> String;

    fn required(&self, field: &'static str) -> Result<&Value>;

    fn required_str(&self, field: &'static str) -> Result<&str>;

    fn required_bool(&self, field: &'static str) -> Result<bool>;

    /// The value of `field`, with `null` read as absent.
    fn present(&self, field: &'static str) -> Option<&Value>;

    fn optional_str(&self, field: &'static str) -> Result<Option<&str>>;

    fn optional_number(&self, field: &'static str) -> Result<Option<&Number>>;

    fn optional_object(&self, field: &'static str) -> Result<Option<&RawCard>>;

    fn optional_array(&self, field: &'static str) -> Result<Option<&Vec<Value>>>;

    /// Joins an array of strings, e.g. `["W", "U"]` into `"WU"`.
    fn optional_joined(&self, field: &'static str) -> Result<Option<String>>;
}

impl RawFields for RawCard {
    fn label(&self) -> String {
        match (self.get("name"), self.get("oracle_id"), self.get("id")) {
            (Some(Value::String(name)), _, _) => format!("\"{name}\""),
            (_, Some(Value::String(id)), _) => format!("with oracle id {id}"),
            (_, _, Some(Value::String(id))) => format!("with id {id}"),
            _ => "<unnamed>".to_string(),
        }
    }

    fn required(&self, field: &'static str) -> Result<&Value> {
        self.get(field).ok_or_else(|| Error::MissingField {
            card: self.label(),
            field,
        })
    }

    fn required_str(&self, field: &'static str) -> Result<&str> {
        self.required(field)?
            .as_str()
            .ok_or_else(|| invalid(self, field, "a string"))
    }

    fn required_bool(&self, field: &'static str) -> Result<bool> {
        self.required(field)?
            .as_bool()
            .ok_or_else(|| invalid(self, field, "a boolean"))
    }

    fn present(&self, field: &'static str) -> Option<&Value> {
        self.get(field).filter(|value| !value.is_null())
    }

    fn optional_str(&self, field: &'static str) -> Result<Option<&str>> {
        self.present(field)
            .map(|value| value.as_str().ok_or_else(|| invalid(self, field, "a string")))
            .transpose()
    }

    fn optional_number(&self, field: &'static str) -> Result<Option<&Number>> {
        match self.present(field) {
            Some(Value::Number(number)) => Ok(Some(number)),
            Some(_) => Err(invalid(self, field, "a number")),
            None => Ok(None),
        }
    }

    fn optional_object(&self, field: &'static str) -> Result<Option<&RawCard>> {
        self.present(field)
            .map(|value| {
                value
                    .as_object()
                    .ok_or_else(|| invalid(self, field, "an object"))
            })
            .transpose()
    }

    fn optional_array(&self, field: &'static str) -> Result<Option<&Vec<Value>>> {
        self.present(field)
            .map(|value| {
                value
                    .as_array()
                    .ok_or_else(|| invalid(self, field, "an array"))
            })
            .transpose()
    }

    fn optional_joined(&self, field: &'static str) -> Result<Option<String>> {
        let Some(values) = self.optional_array(field)? else {
            return Ok(None);
        };

        let parts = values
            .iter()
            .map(|value| {
                value
                    .as_str()
                    .ok_or_else(|| invalid(self, field, "an array of strings"))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Some(parts.into_iter().join("")))
    }
}

fn invalid(card: &RawCard, field: &'static str, expected: &'static str) -> Error {
    Error::InvalidField {
        card: card.label(),
        field,
        expected,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn raw(value: Value) -> RawCard {
        match value {
            Value::Object(map) => map,
            other => panic!("not an object: {other}"),
        }
    }

    #[test]
    fn reports_missing_and_mistyped_fields() {
        let card = raw(json!({ "name": "Foo", "digital": "yes" }));

        let err = card.required_str("set_type").unwrap_err();
        assert!(matches!(
            err,
            Error::MissingField {
                field: "set_type",
                ..
            }
        ));
        assert_eq!(
            err.to_string(),
            "Card \"Foo\" is missing required field `set_type`"
        );

        let err = card.required_bool("digital").unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidField {
                field: "digital",
                ..
            }
        ));
    }

    #[test]
    fn optional_fields_are_none_when_absent() -> anyhow::Result<()> {
        let card = raw(json!({ "oracle_id": "X" }));

        assert_eq!(card.optional_str("flavor_name")?, None);
        assert_eq!(card.optional_number("cmc")?, None);
        assert_eq!(card.optional_joined("colors")?, None);
        assert_eq!(card.label(), "with oracle id X");

        Ok(())
    }

    #[test]
    fn null_optional_fields_are_absent() -> anyhow::Result<()> {
        let card = raw(json!({
            "flavor_name": null,
            "cmc": null,
            "image_uris": null,
            "card_faces": null,
        }));

        assert_eq!(card.optional_str("flavor_name")?, None);
        assert_eq!(card.optional_number("cmc")?, None);
        assert_eq!(card.optional_object("image_uris")?, None);
        assert_eq!(card.optional_array("card_faces")?, None);

        Ok(())
    }

    #[test]
    fn joins_color_arrays() -> anyhow::Result<()> {
        let card = raw(json!({ "colors": ["W", "U"], "color_identity": [] }));

        assert_eq!(card.optional_joined("colors")?.as_deref(), Some("WU"));
        assert_eq!(card.optional_joined("color_identity")?.as_deref(), Some(""));

        Ok(())
    }
}
