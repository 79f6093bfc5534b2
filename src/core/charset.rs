/// Letters whose presence marks a fragment as Turkish UI text.
///
/// Plain `i`/`I` are members, so most English words containing an `i` pass too.
pub const DEFAULT_TARGET_CHARS: &str = "ıiöçşğIÖÇŞĞÜü";

/// A fixed set of characters used as a cheap "needs translation" heuristic.
///
/// There is no language identification here: a fragment qualifies as soon as
/// it contains one member of the set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetCharset {
    chars: Vec<char>,
}

impl TargetCharset {
    pub fn new(chars: &str) -> Self {
        let mut chars: Vec<char> = chars.chars().collect();
        chars.sort_unstable();
        chars.dedup();
        Self { chars }
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.binary_search(&c).is_ok()
    }

    /// Returns true if any character of `text` belongs to the set.
    pub fn matches(&self, text: &str) -> bool {
        text.chars().any(|c| self.contains(c))
    }

    /// Trim a raw candidate and keep it only if it is non-empty and matches.
    pub fn accept<'a>(&self, raw: &'a str) -> Option<&'a str> {
        let text = raw.trim();
        (!text.is_empty() && self.matches(text)).then_some(text)
    }
}

impl Default for TargetCharset {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET_CHARS)
    }
}
