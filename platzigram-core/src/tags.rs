//! Hashtag extraction from image descriptions.

use once_cell::sync::Lazy;
use regex::Regex;

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"#(\w+)").unwrap());

/// Extract hashtags from free text.
///
/// Returns the tag tokens lowercased and in order of appearance, with the
/// leading `#` stripped. Duplicates are kept; callers that want a set can
/// dedup.
pub fn extract_tags(text: &str) -> Vec<String> {
    TAG_RE
        .captures_iter(text)
        .map(|caps| caps[1].to_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_single_tag() {
        assert_eq!(extract_tags("sunset over the bay #travel"), vec!["travel"]);
    }

    #[test]
    fn lowercases_tags() {
        assert_eq!(
            extract_tags("#AWESOME picture from #Platzi"),
            vec!["awesome", "platzi"]
        );
    }

    #[test]
    fn preserves_order_and_duplicates() {
        assert_eq!(extract_tags("#b then #a then #b"), vec!["b", "a", "b"]);
    }

    #[test]
    fn empty_when_no_tags() {
        assert!(extract_tags("just a plain caption").is_empty());
        assert!(extract_tags("").is_empty());
    }

    #[test]
    fn allows_digits_and_underscores() {
        assert_eq!(extract_tags("#snow_day2"), vec!["snow_day2"]);
    }

    #[test]
    fn stops_at_punctuation() {
        assert_eq!(extract_tags("loved the #beach!"), vec!["beach"]);
    }

    #[test]
    fn matches_mid_word_hash() {
        assert_eq!(extract_tags("weird caption#inline here"), vec!["inline"]);
    }

    #[test]
    fn bare_hash_is_not_a_tag() {
        assert!(extract_tags("# spaced out").is_empty());
    }
}
