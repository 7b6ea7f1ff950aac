//! Slugs address a cached result by position.
//!
//! A slug looks like `spicy-chicken-soup-3`. Only the trailing integer is
//! used for lookup; the title fragment in front of it is decoration and is
//! never checked against the cached record.

/// Build the slug for the record at `index` in the cached results
///
/// A title with no slug characters leaves an empty prefix (`-4`); the
/// index still resolves.
pub fn build_slug(title: &str, index: usize) -> String {
    format!("{}-{}", normalize_title(title), index)
}

/// Lowercase the title and reduce it to hyphen-separated `[a-z0-9]` words
pub fn normalize_title(title: &str) -> String {
    let lowered = title.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut pending_hyphen = false;

    for ch in lowered.chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch);
        } else if ch == '-' || ch.is_whitespace() {
            pending_hyphen = true;
        }
        // anything else is stripped without separating words
    }

    slug
}

/// Outcome of reading the index suffix from a slug
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlugIndex {
    /// A non-negative integer that fits in `usize`
    At(usize),
    /// All digits, but larger than any possible list position
    Overflow,
    /// Not a non-negative integer
    Invalid,
}

/// Extract the positional index from the last `-` separated segment
pub fn parse_slug_index(slug: &str) -> SlugIndex {
    let segment = slug.rsplit('-').next().unwrap_or_default().trim();
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return SlugIndex::Invalid;
    }

    match segment.parse::<usize>() {
        Ok(index) => SlugIndex::At(index),
        Err(_) => SlugIndex::Overflow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_slug() {
        assert_eq!(build_slug("Spicy Chicken Soup!", 3), "spicy-chicken-soup-3");
        assert_eq!(build_slug("Chicken Vesuvio", 0), "chicken-vesuvio-0");
    }

    #[test]
    fn test_normalize_collapses_separators() {
        assert_eq!(normalize_title("  Mac   &   Cheese  "), "mac-cheese");
        assert_eq!(normalize_title("Pad--Thai - Classic"), "pad-thai-classic");
        assert_eq!(normalize_title("--Already-Slugged--"), "already-slugged");
        assert_eq!(normalize_title("Tab\tand\nnewline"), "tab-and-newline");
    }

    #[test]
    fn test_normalize_strips_without_splitting() {
        assert_eq!(normalize_title("Mom's Apple Pie"), "moms-apple-pie");
        assert_eq!(normalize_title("Crème Brûlée"), "crme-brle");
        assert_eq!(normalize_title("5-Minute Eggs"), "5-minute-eggs");
    }

    #[test]
    fn test_title_without_slug_characters() {
        assert_eq!(normalize_title("!!!"), "");
        assert_eq!(build_slug("!!!", 4), "-4");
        assert_eq!(build_slug("", 0), "-0");
        assert_eq!(parse_slug_index(&build_slug("!!!", 4)), SlugIndex::At(4));
    }

    #[test]
    fn test_parse_slug_index() {
        assert_eq!(parse_slug_index("anything-2"), SlugIndex::At(2));
        assert_eq!(parse_slug_index("7"), SlugIndex::At(7));
        assert_eq!(parse_slug_index("5-minute-eggs-11"), SlugIndex::At(11));
        assert_eq!(parse_slug_index("soup-"), SlugIndex::Invalid);
        assert_eq!(parse_slug_index("soup-abc"), SlugIndex::Invalid);
        assert_eq!(parse_slug_index("soup-+3"), SlugIndex::Invalid);
        assert_eq!(parse_slug_index("soup-1.5"), SlugIndex::Invalid);
        assert_eq!(parse_slug_index(""), SlugIndex::Invalid);
        assert_eq!(
            parse_slug_index("soup-999999999999999999999999999"),
            SlugIndex::Overflow
        );
    }

    #[test]
    fn test_slug_round_trips_to_index() {
        for (i, title) in ["Beef Stew", "Fish & Chips", "", "Tacos!"].iter().enumerate() {
            assert_eq!(parse_slug_index(&build_slug(title, i)), SlugIndex::At(i));
        }
    }
}
