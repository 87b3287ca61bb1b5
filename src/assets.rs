//! Classification of uploaded assets by content type.

use crate::{
    errors::{SessionError, SessionResult},
    remote::models::ContentEntry,
};
use std::str::FromStr;

/// A category of uploaded asset.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum AssetCategory {
    Images,
    Documents,
}

impl AssetCategory {
    /// The file name suffixes belonging to the category.
    pub fn suffixes(self) -> &'static [&'static str] {
        match self {
            Self::Images => &[".jpg", ".jpeg", ".png", ".gif"],
            Self::Documents => &[".doc", ".docx", ".pdf"],
        }
    }

    /// Returns whether `name` belongs to the category. Suffixes match case-insensitively.
    pub fn matches(self, name: &str) -> bool {
        let name = name.to_ascii_lowercase();
        self.suffixes().iter().any(|suffix| name.ends_with(suffix))
    }
}

impl FromStr for AssetCategory {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "images" | "image" => Ok(Self::Images),
            "documents" => Ok(Self::Documents),
            other => Err(SessionError::UnknownCategory(other.to_string())),
        }
    }
}

/// Filters an asset listing down to the entries of `category`, preserving order.
///
/// ## Returns
/// - `Err(SessionError::UnknownCategory)` - If `category` is not `images`, `image` or `documents`.
pub fn filter_assets<'a>(
    assets: &'a [ContentEntry],
    category: &str,
) -> SessionResult<Vec<&'a ContentEntry>> {
    let category = category.parse::<AssetCategory>()?;
    Ok(assets.iter().filter(|a| category.matches(&a.name)).collect())
}

#[cfg(test)]
mod test {
    use super::*;

    fn assets() -> Vec<ContentEntry> {
        ["a.png", "b.pdf", "c.docx"]
            .into_iter()
            .map(ContentEntry::named)
            .collect()
    }

    fn names(entries: Vec<&ContentEntry>) -> Vec<&str> {
        entries.into_iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn splits_images_from_documents() {
        let assets = assets();
        assert_eq!(names(filter_assets(&assets, "images").unwrap()), ["a.png"]);
        assert_eq!(
            names(filter_assets(&assets, "documents").unwrap()),
            ["b.pdf", "c.docx"]
        );
    }

    #[test]
    fn image_is_a_synonym_for_images() {
        let assets = assets();
        assert_eq!(
            filter_assets(&assets, "image").unwrap(),
            filter_assets(&assets, "images").unwrap()
        );
    }

    #[test]
    fn matches_on_suffix_only() {
        let assets = vec![
            ContentEntry::named("png-notes.txt"),
            ContentEntry::named("LOGO.PNG"),
            ContentEntry::named("photo.jpeg"),
        ];
        assert_eq!(
            names(filter_assets(&assets, "images").unwrap()),
            ["LOGO.PNG", "photo.jpeg"]
        );
    }

    #[test]
    fn unknown_category_fails() {
        assert!(matches!(
            filter_assets(&assets(), "videos"),
            Err(SessionError::UnknownCategory(c)) if c == "videos"
        ));
    }
}
