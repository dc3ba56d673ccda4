//! Request options and their translation into API path segments
//!
//! The API takes its query as `/`-separated `key:value` path segments:
//!
//! ```text
//! language:rus/limit:60/order:date,desc/export:zxPicture/filter:id=42
//! ```
//!
//! Generic options map straight onto segments. Filter options go through
//! [`FILTER_KEYS`] and are collected into one trailing `filter:` segment.

use std::fmt;

use rust_decimal::Decimal;

use crate::types::{EntityKind, Language, Sorting};
use crate::{Error, Result};

/// Options passed through as `name:value` segments
pub const GENERIC_OPTIONS: [&str; 4] = ["language", "order", "start", "limit"];

/// Filter option names and their wire keys.
///
/// Wire keys starting with an uppercase letter are scoped to the exported
/// entity: `MinRating` becomes `zxPictureMinRating` for images.
pub const FILTER_KEYS: &[(&str, &str)] = &[
    ("author_id", "authorId"),
    ("compo", "Compo"),
    ("format", "Format"),
    ("format_group", "FormatGroup"),
    ("has_inspiration", "Inspiration"),
    ("has_stages", "Stages"),
    ("id", "id"),
    ("min_party_place", "MinPartyPlace"),
    ("min_rating", "MinRating"),
    ("tags_exclude", "TagsExclude"),
    ("tags_include", "TagsInclude"),
    ("title", "TitleSearch"),
    ("type", "Type"),
    ("years", "Year"),
];

/// Value of a single option
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    Scalar(String),
    /// Sent comma-joined
    List(Vec<String>),
}

impl OptionValue {
    pub fn list<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: ToString,
    {
        OptionValue::List(items.into_iter().map(|item| item.to_string()).collect())
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Scalar(value) => f.write_str(value),
            OptionValue::List(items) => f.write_str(&items.join(",")),
        }
    }
}

macro_rules! scalar_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for OptionValue {
                fn from(value: $ty) -> Self {
                    OptionValue::Scalar(value.to_string())
                }
            }
        )*
    };
}

scalar_from!(&str, String, i32, i64, u32, u64, Decimal, Language, Sorting);

/// Whole numbers keep their decimal point (`3.0`, not `3`) so a float filter
/// is never sent as an integer. Prefer [`Decimal`] where the exact digits
/// matter.
impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        OptionValue::Scalar(format!("{value:?}"))
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Scalar(if value { "1" } else { "0" }.to_string())
    }
}

impl<T: ToString> From<Vec<T>> for OptionValue {
    fn from(items: Vec<T>) -> Self {
        OptionValue::list(items)
    }
}

impl<T: ToString, const N: usize> From<[T; N]> for OptionValue {
    fn from(items: [T; N]) -> Self {
        OptionValue::list(items)
    }
}

/// Ordered option set for a request
///
/// Names are checked only when the request path is built, so an unknown name
/// surfaces as [`Error::UnknownOption`] before anything is sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    entries: Vec<(String, OptionValue)>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an option, replacing an earlier value in place
    pub fn set(mut self, name: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<OptionValue>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Append an option unless the caller already set it
    pub fn insert_default(&mut self, name: &str, value: impl Into<OptionValue>) {
        if !self.contains(name) {
            self.entries.push((name.to_string(), value.into()));
        }
    }

    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn language(self, language: Language) -> Self {
        self.set("language", language)
    }

    pub fn order(self, sorting: Sorting) -> Self {
        self.set("order", sorting)
    }

    /// Offset of the first record
    pub fn start(self, start: u64) -> Self {
        self.set("start", start)
    }

    pub fn limit(self, limit: u32) -> Self {
        self.set("limit", limit)
    }

    pub fn id(self, id: i64) -> Self {
        self.set("id", id)
    }

    /// Title substring
    pub fn title(self, title: impl Into<String>) -> Self {
        self.set("title", title.into())
    }

    pub fn author_id(self, author_id: i64) -> Self {
        self.set("author_id", author_id)
    }

    pub fn years<I: IntoIterator<Item = i32>>(self, years: I) -> Self {
        self.set("years", OptionValue::list(years))
    }

    /// Lowest average vote, sent with the digits of `rating` unchanged
    pub fn min_rating(self, rating: Decimal) -> Self {
        self.set("min_rating", rating)
    }

    pub fn min_party_place(self, place: u32) -> Self {
        self.set("min_party_place", place)
    }

    pub fn tags_include<I, T>(self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: ToString,
    {
        self.set("tags_include", OptionValue::list(tags))
    }

    pub fn tags_exclude<I, T>(self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: ToString,
    {
        self.set("tags_exclude", OptionValue::list(tags))
    }

    pub fn compo(self, compo: impl Into<String>) -> Self {
        self.set("compo", compo.into())
    }

    pub fn format(self, format: impl Into<String>) -> Self {
        self.set("format", format.into())
    }

    pub fn format_group(self, group: impl Into<String>) -> Self {
        self.set("format_group", group.into())
    }

    pub fn media_type(self, media_type: impl Into<String>) -> Self {
        self.set("type", media_type.into())
    }

    pub fn has_stages(self, value: bool) -> Self {
        self.set("has_stages", value)
    }

    pub fn has_inspiration(self, value: bool) -> Self {
        self.set("has_inspiration", value)
    }
}

fn filter_key(name: &str) -> Option<&'static str> {
    FILTER_KEYS
        .iter()
        .find(|(option, _)| *option == name)
        .map(|(_, wire)| *wire)
}

/// Wire key for a filter, scoped to the entity when it starts uppercase
fn scoped_filter_key(kind: EntityKind, wire: &str) -> String {
    if wire.starts_with(|c: char| c.is_ascii_uppercase()) {
        format!("{kind}{wire}")
    } else {
        wire.to_string()
    }
}

/// Translate options into path segments for an export of `kind`.
///
/// Generic options keep their order, `export:<kind>` follows them and the
/// `filter:` segment, if any, comes last.
pub fn path_segments(kind: EntityKind, options: &Options) -> Result<Vec<String>> {
    let mut segments = Vec::with_capacity(options.len() + 2);
    let mut filters = Vec::new();

    for (name, value) in options.iter() {
        if GENERIC_OPTIONS.iter().any(|generic| *generic == name) {
            segments.push(format!("{name}:{value}"));
        } else if let Some(wire) = filter_key(name) {
            filters.push(format!("{}={value}", scoped_filter_key(kind, wire)));
        } else {
            return Err(Error::UnknownOption(name.to_string()));
        }
    }

    segments.push(format!("export:{kind}"));

    if !filters.is_empty() {
        segments.push(format!("filter:{}", filters.join(";")));
    }

    Ok(segments)
}
