//! Entity kinds, languages and sort orders understood by the API

use std::fmt;

use serde::{Deserialize, Serialize};

/// Record categories the API can export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Author,
    AuthorAlias,
    Group,
    GroupAlias,
    Product,
    ProductCategory,
    Release,
    Image,
    Tune,
}

impl EntityKind {
    /// Wire name used in `export:` segments, filter prefixes and `responseData` keys
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Author => "author",
            EntityKind::AuthorAlias => "authorAlias",
            EntityKind::Group => "group",
            EntityKind::GroupAlias => "groupAlias",
            EntityKind::Product => "zxProd",
            EntityKind::ProductCategory => "zxProdCategory",
            EntityKind::Release => "zxRelease",
            EntityKind::Image => "zxPicture",
            EntityKind::Tune => "zxMusic",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Preferred language for translated response fields
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "eng")]
    English,
    #[default]
    #[serde(rename = "rus")]
    Russian,
    #[serde(rename = "spa")]
    Spanish,
}

impl Language {
    /// Three-letter code sent in the `language:` segment
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "eng",
            Language::Russian => "rus",
            Language::Spanish => "spa",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field a listing can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Year,
    Plays,
    Title,
    Place,
    Date,
    Votes,
    CommentsAmount,
}

impl SortField {
    /// Wire name, first half of an `order:` value
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Year => "year",
            SortField::Plays => "plays",
            SortField::Title => "title",
            SortField::Place => "place",
            SortField::Date => "date",
            SortField::Votes => "votes",
            SortField::CommentsAmount => "commentsAmount",
        }
    }
}

/// Direction applied to a [`SortField`]; descending unless stated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
    /// Random order
    Rand,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
            SortDirection::Rand => "rand",
        }
    }
}

/// Sort order, rendered on the wire as `field,direction`
///
/// The associated constants cover the commonly used presets.
///
/// ```
/// use zxart::{SortDirection, SortField, Sorting};
///
/// assert_eq!(Sorting::TOP_PLACED.to_string(), "place,asc");
/// let oldest = Sorting::new(SortField::Year, SortDirection::Asc);
/// assert_eq!(oldest.to_string(), "year,asc");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sorting {
    pub field: SortField,
    #[serde(default)]
    pub direction: SortDirection,
}

impl Sorting {
    /// Recently uploaded first
    pub const MOST_RECENT: Sorting = Sorting::new(SortField::Date, SortDirection::Desc);
    /// Highest average vote first
    pub const TOP_RATED: Sorting = Sorting::new(SortField::Votes, SortDirection::Desc);
    pub const MOST_PLAYED: Sorting = Sorting::new(SortField::Plays, SortDirection::Desc);
    /// Best event placement first
    pub const TOP_PLACED: Sorting = Sorting::new(SortField::Place, SortDirection::Asc);
    pub const MOST_COMMENTED: Sorting =
        Sorting::new(SortField::CommentsAmount, SortDirection::Desc);

    pub const fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }
}

impl Default for Sorting {
    fn default() -> Self {
        Sorting::MOST_RECENT
    }
}

impl fmt::Display for Sorting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.field.as_str(), self.direction.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_kind_wire_names() {
        assert_eq!(EntityKind::Image.to_string(), "zxPicture");
        assert_eq!(EntityKind::Tune.to_string(), "zxMusic");
        assert_eq!(EntityKind::AuthorAlias.to_string(), "authorAlias");
        assert_eq!(EntityKind::ProductCategory.to_string(), "zxProdCategory");
    }

    #[test]
    fn test_sorting_presets() {
        assert_eq!(Sorting::MOST_RECENT.to_string(), "date,desc");
        assert_eq!(Sorting::TOP_RATED.to_string(), "votes,desc");
        assert_eq!(Sorting::MOST_PLAYED.to_string(), "plays,desc");
        assert_eq!(Sorting::TOP_PLACED.to_string(), "place,asc");
        assert_eq!(Sorting::MOST_COMMENTED.to_string(), "commentsAmount,desc");
        assert_eq!(Sorting::default(), Sorting::MOST_RECENT);
    }

    #[test]
    fn test_sorting_custom() {
        let sorting = Sorting::new(SortField::Year, SortDirection::Rand);
        assert_eq!(sorting.to_string(), "year,rand");
    }

    #[test]
    fn test_language_default_is_russian() {
        assert_eq!(Language::default().to_string(), "rus");
    }
}
