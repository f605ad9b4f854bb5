//! Stop name normalization.
//!
//! Feed names often lead with a direction or flag token ("NB MAIN ST",
//! "FLAGSTOP ELM ST"). Searching by street is far more useful than searching
//! by direction, so the leading run of such keywords is rotated to the end
//! of the name before it is indexed.

use std::borrow::Borrow;
use std::fmt;

/// Tokens rotated to the end of a name. Matching is exact and case-sensitive.
pub const NAME_KEYWORDS: [&str; 5] = ["FLAGSTOP", "WB", "NB", "SB", "EB"];

/// Returns true if `token` is one of [`NAME_KEYWORDS`].
pub fn is_keyword(token: &str) -> bool {
    NAME_KEYWORDS.contains(&token)
}

/// A stop name with its leading keywords moved to the end.
///
/// This is the key used by the name index and the name → stop map.
///
/// # Examples
///
/// ```
/// use stop_server::domain::NormalizedName;
///
/// let name = NormalizedName::from_raw("WB NB ELM ST");
/// assert_eq!(name.as_str(), "ELM ST WB NB");
///
/// // Names that already start with a street are only re-spaced
/// let name = NormalizedName::from_raw("MAIN   ST NB");
/// assert_eq!(name.as_str(), "MAIN ST NB");
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NormalizedName(String);

impl NormalizedName {
    /// Normalize a raw stop name.
    ///
    /// The name is split on whitespace and, while the first token is a
    /// keyword, that token is moved to the end. At most one rotation per
    /// token is performed, so a name made only of keywords comes back in
    /// its original order. Empty and blank names normalize to `""`.
    pub fn from_raw(raw: &str) -> Self {
        let mut tokens: Vec<&str> = raw.split_whitespace().collect();

        for _ in 0..tokens.len() {
            if !is_keyword(tokens[0]) {
                break;
            }
            tokens.rotate_left(1);
        }

        Self(tokens.join(" "))
    }

    /// Returns the normalized name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the name has no characters.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the name, returning the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Borrow<str> for NormalizedName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NormalizedName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for NormalizedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NormalizedName({:?})", self.0)
    }
}

impl fmt::Display for NormalizedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Token drawn from a mix of keywords and street-like words.
    fn token() -> impl Strategy<Value = String> {
        prop_oneof![
            proptest::sample::select(NAME_KEYWORDS.to_vec()).prop_map(str::to_string),
            "[A-Z0-9]{1,6}",
        ]
    }

    proptest! {
        /// Normalization is a permutation of the input tokens
        #[test]
        fn preserves_tokens(tokens in proptest::collection::vec(token(), 0..8)) {
            let raw = tokens.join(" ");
            let normalized = NormalizedName::from_raw(&raw);

            let mut before: Vec<&str> = raw.split_whitespace().collect();
            let mut after: Vec<&str> = normalized.as_str().split_whitespace().collect();
            before.sort_unstable();
            after.sort_unstable();
            prop_assert_eq!(before, after);
        }

        /// A normalized name starts with a non-keyword unless it has none
        #[test]
        fn leading_keyword_only_if_all_keywords(
            tokens in proptest::collection::vec(token(), 1..8)
        ) {
            let normalized = NormalizedName::from_raw(&tokens.join(" "));
            let first = normalized.as_str().split_whitespace().next().unwrap();
            if is_keyword(first) {
                prop_assert!(tokens.iter().all(|t| is_keyword(t)));
            }
        }

        /// Normalizing twice changes nothing
        #[test]
        fn idempotent(tokens in proptest::collection::vec(token(), 0..8)) {
            let once = NormalizedName::from_raw(&tokens.join(" "));
            let twice = NormalizedName::from_raw(once.as_str());
            prop_assert_eq!(once, twice);
        }
    }
}
