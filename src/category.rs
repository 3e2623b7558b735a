//! Keyword-based situation categorizer.
//!
//! Matching is plain substring search on the lowercased input, checked in
//! priority order: professional, personal, social. No match means
//! [`Category::Default`].

use std::fmt;
use std::str::FromStr;

use anyhow::bail;

const PROFESSIONAL_KEYWORDS: &[&str] = &[
    "work",
    "job",
    "meeting",
    "deadline",
    "project",
    "client",
    "office",
    "boss",
    "colleague",
    "email",
    "professional",
];

const PERSONAL_KEYWORDS: &[&str] = &[
    "family",
    "friend",
    "home",
    "birthday",
    "dinner",
    "personal",
    "date",
    "relationship",
    "dishes",
    "chores",
];

const SOCIAL_KEYWORDS: &[&str] = &[
    "party",
    "event",
    "gathering",
    "social",
    "meetup",
    "hangout",
    "club",
    "drink",
    "lunch",
    "coffee",
];

/// The bucket a situation falls into. Selects the template set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Professional,
    Personal,
    Social,
    Default,
}

impl Category {
    /// All categories, in matching priority order.
    pub const ALL: [Category; 4] = [
        Category::Professional,
        Category::Personal,
        Category::Social,
        Category::Default,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Professional => "professional",
            Category::Personal => "personal",
            Category::Social => "social",
            Category::Default => "default",
        }
    }

    /// Keywords that select this category. Empty for `Default`.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Category::Professional => PROFESSIONAL_KEYWORDS,
            Category::Personal => PERSONAL_KEYWORDS,
            Category::Social => SOCIAL_KEYWORDS,
            Category::Default => &[],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        match Category::ALL.iter().find(|c| c.as_str() == wanted) {
            Some(category) => Ok(*category),
            None => bail!("unknown category: {s} (expected professional, personal, social or default)"),
        }
    }
}

/// Pick the category for a free-text situation. Never fails.
pub fn categorize(input: &str) -> Category {
    let input = input.to_lowercase();
    Category::ALL
        .into_iter()
        .find(|category| {
            category
                .keywords()
                .iter()
                .any(|keyword| input.contains(keyword))
        })
        .unwrap_or(Category::Default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn professional_keywords_match() {
        assert_eq!(categorize("quarterly meeting"), Category::Professional);
        assert_eq!(categorize("missed the DEADLINE"), Category::Professional);
        assert_eq!(categorize("my boss called"), Category::Professional);
    }

    #[test]
    fn personal_keywords_match() {
        assert_eq!(categorize("mom's birthday"), Category::Personal);
        assert_eq!(categorize("didn't do the dishes"), Category::Personal);
    }

    #[test]
    fn social_keywords_match() {
        assert_eq!(categorize("Saturday party"), Category::Social);
        assert_eq!(categorize("coffee with Sam"), Category::Social);
    }

    #[test]
    fn no_keyword_falls_back_to_default() {
        assert_eq!(categorize("the thing"), Category::Default);
        assert_eq!(categorize(""), Category::Default);
    }

    #[test]
    fn professional_wins_over_personal_and_social() {
        // "work" + "party" + "family"
        assert_eq!(
            categorize("work party with family"),
            Category::Professional
        );
        assert_eq!(categorize("family party"), Category::Personal);
    }

    #[test]
    fn matches_are_raw_substrings() {
        assert_eq!(categorize("networking"), Category::Professional);
        assert_eq!(categorize("update the app"), Category::Personal);
        assert_eq!(categorize("Tuesday meetup"), Category::Social);
    }

    #[test]
    fn every_category_covers_its_own_keywords() {
        for category in Category::ALL {
            for keyword in category.keywords() {
                assert_eq!(categorize(keyword), category, "keyword: {keyword}");
            }
        }
    }

    #[test]
    fn parse_and_display_round_trip() {
        for category in Category::ALL {
            assert_eq!(category.to_string().parse::<Category>().unwrap(), category);
        }
        assert_eq!(" Social ".parse::<Category>().unwrap(), Category::Social);
    }

    #[test]
    fn parse_unknown_is_error() {
        assert!("work".parse::<Category>().is_err());
    }
}
