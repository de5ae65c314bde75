use crate::text::contains_ignore_ascii_case;

/// A user query split into the words that candidates are matched against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    text: String,
    words: Vec<String>,
}

impl Query {
    /// Parse the raw input. `None` behaves like an empty string.
    pub fn parse<'a>(text: impl Into<Option<&'a str>>) -> Self {
        let text = text.into().unwrap_or_default();
        Self {
            text: text.to_string(),
            words: split_words(text),
        }
    }

    /// The raw text exactly as it was typed.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Lower-cased words in the order they appear in the text.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn first_word(&self) -> Option<&str> {
        self.words.first().map(String::as_str)
    }

    /// Whether the query has no words at all.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words with repeats removed, first occurrence kept.
    pub fn distinct_words(&self) -> Vec<&str> {
        let mut distinct: Vec<&str> = Vec::with_capacity(self.words.len());
        for word in &self.words {
            if !distinct.contains(&word.as_str()) {
                distinct.push(word);
            }
        }
        distinct
    }

    /// True when every word occurs in `text`. Absent text never matches.
    pub fn matches<'a>(&self, text: impl Into<Option<&'a str>>) -> bool {
        match text.into() {
            Some(text) => self
                .words
                .iter()
                .all(|word| contains_ignore_ascii_case(text, word)),
            None => false,
        }
    }

    /// The distinct words of this query that occur in `text`.
    pub fn matched_words(&self, text: &str) -> Vec<&str> {
        self.distinct_words()
            .into_iter()
            .filter(|word| contains_ignore_ascii_case(text, word))
            .collect()
    }

    /// Case-insensitive equality between `text` and the whole query.
    pub fn is_exact(&self, text: &str) -> bool {
        text.to_lowercase() == self.text.to_lowercase()
    }
}

/// Split a query into lower-cased words.
///
/// Anything other than an ASCII letter, digit or underscore separates words.
pub fn parse_query<'a>(query: impl Into<Option<&'a str>>) -> Vec<String> {
    split_words(query.into().unwrap_or_default())
}

/// True when `text` contains every word of `query`, ignoring case.
pub fn matches<'a, 'b>(query: impl Into<Option<&'a str>>, text: impl Into<Option<&'b str>>) -> bool {
    Query::parse(query).matches(text)
}

fn split_words(text: &str) -> Vec<String> {
    text.split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .filter(|word| !word.is_empty())
        .map(str::to_ascii_lowercase)
        .collect()
}
