//! Whitespace tokenizer that splits punctuation off word edges
//!
//! Inner punctuation stays attached ("Band-Aid", "101AD") so the token
//! keeps its meaning; leading and trailing marks become tokens of their
//! own. English clitics split off the word ("here's" is "here" + "'s",
//! "don't" is "do" + "n't") so the stop list can drop them.

use super::stopwords::is_stop_word;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Word,
    Punct,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
}

impl Token {
    fn word(text: &str) -> Self {
        Self {
            text: text.to_string(),
            kind: TokenKind::Word,
        }
    }

    fn punct(c: char) -> Self {
        Self {
            text: c.to_string(),
            kind: TokenKind::Punct,
        }
    }

    pub fn is_punct(&self) -> bool {
        self.kind == TokenKind::Punct
    }

    pub fn is_stop(&self) -> bool {
        self.kind == TokenKind::Word && is_stop_word(&self.text)
    }

    /// Word that carries meaning: not punctuation, not a stop word
    pub fn is_content(&self) -> bool {
        !self.is_punct() && !self.is_stop()
    }
}

/// Punctuation or symbol characters that never start or end a word
pub fn is_punct(c: char) -> bool {
    !c.is_alphanumeric() && !c.is_whitespace()
}

/// Suffixes split off a word, matched case-insensitively
const CLITICS: &[&str] = &["n't", "'s", "'re", "'ll", "'ve", "'d", "'m"];

fn fold(c: char) -> char {
    if c == '\u{2019}' {
        '\''
    } else {
        c.to_ascii_lowercase()
    }
}

/// Index where a trailing clitic starts, if the word has a non-empty stem
fn clitic_start(word: &[char]) -> Option<usize> {
    CLITICS.iter().find_map(|clitic| {
        let len = clitic.chars().count();
        if word.len() <= len {
            return None;
        }
        let start = word.len() - len;
        word[start..]
            .iter()
            .zip(clitic.chars())
            .all(|(c, expected)| fold(*c) == expected)
            .then_some(start)
    })
}

pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();

    for chunk in text.split_whitespace() {
        let chars: Vec<char> = chunk.chars().collect();
        let start = chars.iter().position(|c| !is_punct(*c));
        let Some(start) = start else {
            tokens.extend(chars.iter().map(|c| Token::punct(*c)));
            continue;
        };
        let end = chars
            .iter()
            .rposition(|c| !is_punct(*c))
            .map(|i| i + 1)
            .unwrap_or(chars.len());

        tokens.extend(chars[..start].iter().map(|c| Token::punct(*c)));
        let word = &chars[start..end];
        match clitic_start(word) {
            Some(split) => {
                tokens.push(Token::word(&word[..split].iter().collect::<String>()));
                tokens.push(Token::word(&word[split..].iter().collect::<String>()));
            }
            None => tokens.push(Token::word(&word.iter().collect::<String>())),
        }
        tokens.extend(chars[end..].iter().map(|c| Token::punct(*c)));
    }
    tokens
}

/// Token texts without punctuation
pub fn words(text: &str) -> Vec<String> {
    tokenize(text)
        .into_iter()
        .filter(|t| !t.is_punct())
        .map(|t| t.text)
        .collect()
}

/// Lowercased words that are neither punctuation nor stop words
pub fn content_words(text: &str) -> Vec<String> {
    tokenize(text)
        .into_iter()
        .filter(Token::is_content)
        .map(|t| t.text.to_lowercase())
        .collect()
}

/// Lowercase, drop stop words and punctuation, join with single spaces
pub fn preprocess(text: &str) -> String {
    content_words(&text.to_lowercase()).join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_splits_edge_punctuation() {
        let tokens = tokenize("\"Hello, world!\"");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["\"", "Hello", ",", "world", "!", "\""]);
        assert!(tokens[0].is_punct());
        assert!(!tokens[1].is_punct());
    }

    #[test]
    fn test_inner_punctuation_kept() {
        assert_eq!(words("Mary gave the child a Band-Aid."), vec!["Mary", "gave", "the", "child", "a", "Band-Aid"]);
        assert_eq!(words("Rome 101AD."), vec!["Rome", "101AD"]);
    }

    #[test]
    fn test_punctuation_only_chunk() {
        let tokens = tokenize("wait ... what");
        assert_eq!(tokens.len(), 5);
        assert!(tokens[1].is_punct() && tokens[2].is_punct() && tokens[3].is_punct());
    }

    #[test]
    fn test_preprocess() {
        assert_eq!(preprocess("this is the first review in lowercase."), "review lowercase");
        assert_eq!(preprocess("Here's another review!"), "review");
        assert_eq!(preprocess("   "), "");
    }

    #[test]
    fn test_clitics_split_off() {
        assert_eq!(words("Here's one"), vec!["Here", "'s", "one"]);
        assert_eq!(words("I don't know"), vec!["I", "do", "n't", "know"]);
        assert_eq!(words("They\u{2019}LL go"), vec!["They", "\u{2019}LL", "go"]);
        assert_eq!(words("o'clock 's"), vec!["o'clock", "s"]);
        assert!(tokenize("we've").iter().all(|t| t.kind == TokenKind::Word));
        assert!(content_words("you're isn't we'd").is_empty());
    }

    #[test]
    fn test_content_words() {
        assert_eq!(content_words("The old man the boats."), vec!["old", "man", "boats"]);
    }
}
