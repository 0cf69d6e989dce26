use crate::errors::OptionsError;
use serde::{Deserialize, Serialize};

pub const STRIP_TAGS: &str = "strip_tags";
pub const STRIP_BASIC: &str = "strip_basic";
pub const REPLACEMENTS: &str = "replacements";

/// Keys accepted by [`Options::merged`]
pub const OPTION_KEYS: [&str; 3] = [STRIP_TAGS, STRIP_BASIC, REPLACEMENTS];

/// Text replacement setting handed to the cue text transform
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Replacements {
    #[default]
    Disabled,
    /// Use the transform's own replacement table
    Enabled,
    /// Explicit (search, replace) pairs
    Table(Vec<(String, String)>),
}

impl Replacements {
    pub fn is_enabled(&self) -> bool {
        !matches!(self, Replacements::Disabled)
    }
}

impl From<bool> for Replacements {
    fn from(enabled: bool) -> Self {
        if enabled {
            Replacements::Enabled
        } else {
            Replacements::Disabled
        }
    }
}

/// Value supplied for one option key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    Flag(bool),
    Table(Vec<(String, String)>),
}

impl OptionValue {
    fn into_flag(self, key: &str) -> Result<bool, OptionsError> {
        match self {
            OptionValue::Flag(flag) => Ok(flag),
            OptionValue::Table(_) => Err(OptionsError::InvalidValue {
                key: key.to_string(),
                expected: "a boolean",
            }),
        }
    }
}

impl From<OptionValue> for Replacements {
    fn from(value: OptionValue) -> Self {
        match value {
            OptionValue::Flag(flag) => flag.into(),
            OptionValue::Table(table) => Replacements::Table(table),
        }
    }
}

impl From<bool> for OptionValue {
    fn from(flag: bool) -> Self {
        OptionValue::Flag(flag)
    }
}

impl From<Vec<(String, String)>> for OptionValue {
    fn from(table: Vec<(String, String)>) -> Self {
        OptionValue::Table(table)
    }
}

/// Serialization options, all off by default
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Options {
    pub strip_tags: bool,
    pub strip_basic: bool,
    pub replacements: Replacements,
}

impl Options {
    /// Build options from key/value pairs laid over the defaults.
    ///
    /// Fails on the first unknown key or mistyped value; nothing is returned
    /// for a partially applied set.
    pub fn merged<I, K>(pairs: I) -> Result<Options, OptionsError>
    where
        I: IntoIterator<Item = (K, OptionValue)>,
        K: AsRef<str>,
    {
        let mut options = Options::default();
        for (key, value) in pairs {
            match key.as_ref() {
                STRIP_TAGS => options.strip_tags = value.into_flag(STRIP_TAGS)?,
                STRIP_BASIC => options.strip_basic = value.into_flag(STRIP_BASIC)?,
                REPLACEMENTS => options.replacements = value.into(),
                other => {
                    return Err(OptionsError::InvalidKey {
                        key: other.to_string(),
                    })
                }
            }
        }

        Ok(options)
    }
}
