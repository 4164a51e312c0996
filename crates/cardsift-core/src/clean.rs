use crate::error::Result;
use deunicode::deunicode_char;
use regex::Regex;

/// Cleans raw display names into a single canonical given name.
///
/// Source names are frequently decorated with emoji, stylized Unicode
/// letters, and trailing relationship labels ("Maria Sogra"); only the
/// first token that survives cleaning is trusted as the person's name.
#[derive(Debug, Clone)]
pub struct NameCleaner {
    title_regex: Option<Regex>,
}

impl NameCleaner {
    /// Builds a cleaner that strips the given honorific/title words.
    /// Titles match case-insensitively, at word boundaries, with an
    /// optional trailing period.
    pub fn new(titles: &[String]) -> Result<Self> {
        let titles: Vec<String> = titles
            .iter()
            .map(|title| title.trim())
            .filter(|title| !title.is_empty())
            .map(regex::escape)
            .collect();

        if titles.is_empty() {
            return Ok(Self { title_regex: None });
        }

        let pattern = format!(r"(?i)\b({})\.?\b", titles.join("|"));
        Ok(Self {
            title_regex: Some(Regex::new(&pattern)?),
        })
    }

    pub fn clean(&self, raw: &str) -> String {
        let folded = ascii_fold(raw);
        let stripped = match &self.title_regex {
            Some(regex) => regex.replace_all(&folded, "").into_owned(),
            None => folded,
        };
        match stripped.split_whitespace().next() {
            Some(word) => capitalize(word),
            None => String::new(),
        }
    }
}

/// Transliterates letters and digits to ASCII and drops everything
/// else except whitespace. Emoji and decorative symbols disappear
/// entirely rather than being spelled out.
fn ascii_fold(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if ch.is_ascii() {
            if ch.is_ascii_alphanumeric() || ch.is_ascii_whitespace() {
                out.push(ch);
            }
        } else if ch.is_alphanumeric() {
            for mapped in deunicode_char(ch).unwrap_or("").chars() {
                if mapped.is_ascii_alphanumeric() {
                    out.push(mapped);
                }
            }
        } else if ch.is_whitespace() {
            out.push(' ');
        }
    }
    out
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
