//! Raw `Book` column value → collection slug and display name
//!
//! Resolution walks an ordered rule table: exact primary names, exact
//! alternate spellings, then case-insensitive keywords. Anything left over
//! gets a slug derived from the name itself, so every row resolves.

/// A canonical collection: slug used for paths, display name for the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collection {
    pub slug: &'static str,
    pub name: &'static str,
}

pub const BUKHARI: Collection = Collection {
    slug: "bukhari",
    name: "Sahih al-Bukhari",
};
pub const MUSLIM: Collection = Collection {
    slug: "muslim",
    name: "Sahih Muslim",
};
pub const ABU_DAWUD: Collection = Collection {
    slug: "abudawud",
    name: "Sunan Abu Dawud",
};
pub const TIRMIDHI: Collection = Collection {
    slug: "tirmidhi",
    name: "Jami at-Tirmidhi",
};
pub const NASAI: Collection = Collection {
    slug: "nasai",
    name: "Sunan an-Nasa'i",
};
pub const IBN_MAJAH: Collection = Collection {
    slug: "ibnmajah",
    name: "Sunan Ibn Majah",
};

/// How a rule matches the raw name.
#[derive(Debug, Clone, Copy)]
enum Matcher {
    /// Whole string, case-sensitive
    Exact(&'static str),
    /// Lowercase keyword anywhere in the lowercased name
    Keyword(&'static str),
}

impl Matcher {
    fn matches(self, raw: &str, lower: &str) -> bool {
        match self {
            Self::Exact(name) => raw == name,
            Self::Keyword(kw) => lower.contains(kw),
        }
    }
}

/// Evaluated top to bottom, first match wins.
const RULES: &[(Matcher, Collection)] = &[
    // Primary names as they appear in the dataset
    (Matcher::Exact("Sahih al-Bukhari"), BUKHARI),
    (Matcher::Exact("Sahih Muslim"), MUSLIM),
    (Matcher::Exact("Sunan Abu Dawud"), ABU_DAWUD),
    (Matcher::Exact("Jami` at-Tirmidhi"), TIRMIDHI),
    (Matcher::Exact("Sunan an-Nasa'i"), NASAI),
    (Matcher::Exact("Sunan Ibn Majah"), IBN_MAJAH),
    // Alternate spellings
    (Matcher::Exact("Jami' at-Tirmidhi"), TIRMIDHI),
    (Matcher::Exact("Jami at-Tirmidhi"), TIRMIDHI),
    (Matcher::Exact("Sunan an-Nasai"), NASAI),
    // Keywords ("dawud" also covers "abu dawud")
    (Matcher::Keyword("bukhari"), BUKHARI),
    (Matcher::Keyword("muslim"), MUSLIM),
    (Matcher::Keyword("dawud"), ABU_DAWUD),
    (Matcher::Keyword("tirmidhi"), TIRMIDHI),
    (Matcher::Keyword("nasa"), NASAI),
    (Matcher::Keyword("majah"), IBN_MAJAH),
];

/// Resolved (slug, display name) pair for one raw name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub slug: String,
    pub name: String,
}

impl From<Collection> for Resolved {
    fn from(c: Collection) -> Self {
        Self {
            slug: c.slug.to_string(),
            name: c.name.to_string(),
        }
    }
}

/// Look up a raw name in the rule table.
pub fn lookup(raw: &str) -> Option<Collection> {
    let lower = raw.to_lowercase();
    RULES
        .iter()
        .find(|(matcher, _)| matcher.matches(raw, &lower))
        .map(|(_, collection)| *collection)
}

/// Resolve any raw name. Never fails.
///
/// Unknown names keep their raw display name; the slug is the lowercased
/// name with everything but `[a-z0-9]` stripped.
pub fn resolve(raw: &str) -> Resolved {
    match lookup(raw) {
        Some(collection) => collection.into(),
        None => Resolved {
            slug: fallback_slug(raw),
            name: raw.to_string(),
        },
    }
}

fn fallback_slug(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}
