use std::path::Path;

use derive_more::Display;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Display, derive_more::Error)]
pub enum Error {
    #[display(fmt = "No such file: {}", path)]
    NotFound { path: String },

    #[display(fmt = "Failed to read {}", path)]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[display(fmt = "Failed to parse {}", path)]
    Parse {
        path: String,
        source: serde_json::Error,
    },

    #[display(fmt = "Failed to write {}", path)]
    Write {
        path: String,
        source: std::io::Error,
    },

    #[display(fmt = "Failed to serialize cards to {}", path)]
    Serialize {
        path: String,
        source: serde_json::Error,
    },

    #[display(fmt = "Card {} is missing required field `{}`", card, field)]
    MissingField { card: String, field: &'static str },

    #[display(fmt = "Card {} has field `{}` which is not {}", card, field, expected)]
    InvalidField {
        card: String,
        field: &'static str,
        expected: &'static str,
    },
}

impl Error {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        let path = path.display().to_string();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Io { path, source }
        }
    }

    /// Name of the record field the error was raised for, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::MissingField { field, .. } | Self::InvalidField { field, .. } => Some(field),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn not_found_is_split_from_other_io_errors() {
        let path = Path::new("missing.json");

        let missing = Error::io(path, std::io::Error::from(std::io::ErrorKind::NotFound));
        assert!(matches!(missing, Error::NotFound { .. }));
        assert_eq!(missing.to_string(), "No such file: missing.json");

        let denied = Error::io(
            path,
            std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        );
        assert!(matches!(denied, Error::Io { .. }));
        assert!(std::error::Error::source(&denied).is_some());
        assert!(std::error::Error::source(&missing).is_none());
    }

    #[test]
    fn missing_field_names_card_and_field() {
        let err = Error::MissingField {
            card: "\"Foo\"".to_string(),
            field: "set_type",
        };

        assert_eq!(err.field(), Some("set_type"));
        assert_eq!(
            err.to_string(),
            "Card \"Foo\" is missing required field `set_type`"
        );
    }
}
