//! Deterministic ordering of the media objects currently in storage.

/// Recognized media suffix, matched case-insensitively.
pub const MEDIA_SUFFIX: &str = ".mp4";

/// Ordered sequence of eligible media keys derived from one storage listing.
///
/// The ordering is a pure function of the listing contents: keys are filtered
/// to the recognized media suffix and sorted by ascending lexicographic byte
/// order, regardless of the order the storage backend returned them in. An
/// empty catalog is a valid value, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    keys: Vec<String>,
}

impl Catalog {
    pub fn from_listing(listing: impl IntoIterator<Item = String>) -> Self {
        let mut keys: Vec<String> = listing
            .into_iter()
            .filter(|key| is_media_key(key))
            .collect();
        keys.sort_unstable();
        Self { keys }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.keys.get(index).map(String::as_str)
    }

    pub fn first(&self) -> Option<&str> {
        self.get(0)
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }
}

fn is_media_key(key: &str) -> bool {
    let bytes = key.as_bytes();
    bytes.len() >= MEDIA_SUFFIX.len()
        && bytes[bytes.len() - MEDIA_SUFFIX.len()..].eq_ignore_ascii_case(MEDIA_SUFFIX.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_keys_lexicographically_regardless_of_listing_order() {
        let catalog = Catalog::from_listing(vec![
            "c.mp4".to_string(),
            "a.mp4".to_string(),
            "b.mp4".to_string(),
        ]);

        assert_eq!(catalog.keys(), ["a.mp4", "b.mp4", "c.mp4"]);
    }

    #[test]
    fn filters_non_media_keys_case_insensitively() {
        let catalog = Catalog::from_listing(vec![
            "A.MP4".to_string(),
            "a.mp4".to_string(),
            "a.Mp4".to_string(),
            "a.mp3".to_string(),
            "notes.txt".to_string(),
            "mp4".to_string(),
        ]);

        assert_eq!(catalog.keys(), ["A.MP4", "a.Mp4", "a.mp4"]);
    }

    #[test]
    fn empty_listing_yields_valid_empty_catalog() {
        let catalog = Catalog::from_listing(Vec::new());

        assert!(catalog.is_empty());
        assert_eq!(catalog.first(), None);
        assert_eq!(catalog.get(0), None);
    }

    #[test]
    fn entry_count_matches_media_object_count() {
        let listing: Vec<String> = (0..250).map(|n| format!("clip-{n:04}.mp4")).collect();
        let catalog = Catalog::from_listing(listing);

        assert_eq!(catalog.len(), 250);
        assert_eq!(catalog.first(), Some("clip-0000.mp4"));
        assert_eq!(catalog.get(249), Some("clip-0249.mp4"));
    }
}
