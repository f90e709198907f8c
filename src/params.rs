use std::collections::BTreeMap;

use crate::{error::InvalidArgument, lexer::Tokenizer};

/// Exported in place of a value for keys given without one.
pub const NO_VALUE_KEY: &str = "__NO_VALUE_KEY";

/// The complete key to value(s) table parsed from the command line.
///
/// Every occurrence of a key is kept in order; `None` records an occurrence
/// that had no value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultiParams {
    data: BTreeMap<String, Vec<Option<String>>>,
}

impl MultiParams {
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, InvalidArgument> {
        let mut data: BTreeMap<String, Vec<Option<String>>> = BTreeMap::new();
        for param in Tokenizer::new(args) {
            let param = param?;
            data.entry(param.key.to_owned())
                .or_default()
                .push(param.value.map(str::to_owned));
        }
        Ok(Self { data })
    }

    pub fn has(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Look up a key that must appear at most once and carry a value.
    pub fn get(&self, key: &str) -> Result<Option<&str>, InvalidArgument> {
        match self.data.get(key).map(Vec::as_slice) {
            None => Ok(None),
            Some([Some(value)]) => Ok(Some(value.as_str())),
            Some([None]) => Err(missing_value(key)),
            Some(values) => Err(InvalidArgument::MultipleValues {
                key: key.to_owned(),
                count: values.len(),
            }),
        }
    }

    /// All values of a repeatable key, in the order they were supplied.
    ///
    /// When `Some`, the list is never empty.
    pub fn get_multi(&self, key: &str) -> Result<Option<Vec<&str>>, InvalidArgument> {
        let Some(values) = self.data.get(key) else {
            return Ok(None);
        };
        values
            .iter()
            .map(|value| value.as_deref().ok_or_else(|| missing_value(key)))
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.data.keys().map(String::as_str)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Flatten to one value per key. Repeated keys keep their last value.
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.data
            .iter()
            .map(|(key, values)| {
                let value = values.last().and_then(Option::as_deref).unwrap_or(NO_VALUE_KEY);
                (key.clone(), value.to_owned())
            })
            .collect()
    }
}

fn missing_value(key: &str) -> InvalidArgument {
    InvalidArgument::MissingValue {
        key: key.to_owned(),
    }
}
