/// Set types that never describe playable cards.
pub const EXCLUDED_SET_TYPES: &[&str] = &["memorabilia", "token"];

/// Layouts of tokens, emblems and the various casual-format oversized cards.
pub const EXCLUDED_LAYOUTS: &[&str] = &[
    "scheme",
    "token",
    "planar",
    "emblem",
    "vanguard",
    "double_faced_token",
];

/// Optional fields extracted from the dumps on top of the always present
/// `cmc`, `sfuri`, `img`, `name`, `type`, `cost` and `flavor_name`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fields {
    /// Emit `oracle` on every face.
    pub oracle_text: bool,
    /// Aggregate `rarities` over all printings of a card.
    pub rarities: bool,
    /// Emit `formats`, the formats a card is legal or restricted in.
    pub formats: bool,
    /// Emit `identity`, the joined color identity.
    pub identity: bool,
    /// Emit `colors` on cards and faces.
    pub colors: bool,
}

impl Fields {
    pub const BASIC: Fields = Fields {
        oracle_text: false,
        rarities: false,
        formats: false,
        identity: false,
        colors: false,
    };

    pub const ORACLE: Fields = Fields {
        oracle_text: true,
        rarities: true,
        ..Fields::BASIC
    };

    pub const ALL: Fields = Fields {
        oracle_text: true,
        rarities: true,
        formats: true,
        identity: true,
        colors: true,
    };
}

impl Default for Fields {
    fn default() -> Self {
        Self::ORACLE
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub excluded_set_types: Vec<String>,
    pub excluded_layouts: Vec<String>,
    /// Individual set codes to drop, e.g. playtest sets.
    pub excluded_sets: Vec<String>,
    pub fields: Fields,
}

impl Config {
    pub fn with_fields(fields: Fields) -> Self {
        Self {
            fields,
            ..Self::default()
        }
    }

    pub fn excludes_set_type(&self, set_type: &str) -> bool {
        self.excluded_set_types.iter().any(|s| s == set_type)
    }

    pub fn excludes_layout(&self, layout: &str) -> bool {
        self.excluded_layouts.iter().any(|l| l == layout)
    }

    pub fn excludes_set(&self, set: &str) -> bool {
        self.excluded_sets.iter().any(|s| s == set)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            excluded_set_types: EXCLUDED_SET_TYPES.iter().map(|s| s.to_string()).collect(),
            excluded_layouts: EXCLUDED_LAYOUTS.iter().map(|l| l.to_string()).collect(),
            excluded_sets: vec![],
            fields: Fields::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_excludes_meta_cards() {
        let config = Config::default();

        assert!(config.excludes_set_type("memorabilia"));
        assert!(config.excludes_set_type("token"));
        assert!(!config.excludes_set_type("core"));

        for layout in EXCLUDED_LAYOUTS {
            assert!(config.excludes_layout(layout));
        }
        assert!(!config.excludes_layout("transform"));
        assert!(!config.excludes_set("cmb1"));
    }

    #[test]
    fn default_fields_extract_oracle_text_and_rarities() {
        let config = Config::default();
        assert_eq!(config.fields, Fields::ORACLE);
        assert!(config.fields.oracle_text);
        assert!(config.fields.rarities);
        assert!(!config.fields.formats);

        let basic = Config::with_fields(Fields::BASIC);
        assert_eq!(basic.excluded_layouts, config.excluded_layouts);
        assert!(!basic.fields.rarities);
    }
}
