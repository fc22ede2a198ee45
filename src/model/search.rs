use super::person::Person;

/// Whitespace-separated keywords; a person matches when any keyword does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    keywords: Vec<String>,
}

impl SearchQuery {
    /// Returns `None` when the input holds no keywords.
    pub fn parse(input: &str) -> Option<Self> {
        Self::from_keywords(input.split_whitespace())
    }

    pub fn from_keywords<I, S>(keywords: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords: Vec<String> = keywords
            .into_iter()
            .map(|keyword| keyword.as_ref().trim().to_string())
            .filter(|keyword| !keyword.is_empty())
            .collect();
        if keywords.is_empty() {
            None
        } else {
            Some(Self { keywords })
        }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn matches(&self, person: &Person) -> bool {
        self.keywords.iter().any(|keyword| person.contains(keyword))
    }
}
