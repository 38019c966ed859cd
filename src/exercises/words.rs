//! Word games: prefix/suffix vocabulary, alternating case and sentence
//! manipulation

use crate::console::Terminal;
use crate::errors::{BootcampError, Result};

pub fn add_prefix_un(word: &str) -> String {
    format!("un{}", word)
}

/// Apply the first element as a prefix to every following word
///
/// `["en", "close", "joy"]` becomes `"en :: enclose :: enjoy"`.
pub fn make_word_groups<S: AsRef<str>>(vocab: &[S]) -> String {
    let Some((prefix, words)) = vocab.split_first() else {
        return String::new();
    };
    let prefix = prefix.as_ref();

    std::iter::once(prefix.to_string())
        .chain(words.iter().map(|w| format!("{}{}", prefix, w.as_ref())))
        .collect::<Vec<_>>()
        .join(" :: ")
}

/// Strip a trailing "ness", turning "iness" back into "y"
///
/// Words without the suffix come back unchanged.
pub fn remove_suffix_ness(word: &str) -> String {
    if let Some(stem) = word.strip_suffix("iness") {
        format!("{}y", stem)
    } else if let Some(stem) = word.strip_suffix("ness") {
        stem.to_string()
    } else {
        word.to_string()
    }
}

/// Pick a word by index (negative counts from the end) and add "en"
pub fn adjective_to_verb(sentence: &str, index: i64) -> Result<String> {
    let words: Vec<&str> = sentence.split_whitespace().collect();
    let len = words.len() as i64;
    let resolved = if index < 0 { len + index } else { index };

    if resolved < 0 || resolved >= len {
        return Err(BootcampError::InvalidInput(format!(
            "word index {} is out of range for a {}-word sentence",
            index, len
        )));
    }

    let word = words[resolved as usize].trim_end_matches('.');
    Ok(format!("{}en", word))
}

/// Upper-case even character positions, lower-case odd ones
pub fn alternate_characters(text: &str) -> String {
    text.chars()
        .enumerate()
        .flat_map(|(i, c)| {
            let cased: Vec<char> = if i % 2 == 0 {
                c.to_uppercase().collect()
            } else {
                c.to_lowercase().collect()
            };
            cased
        })
        .collect()
}

/// Lower-case even words, upper-case odd ones; splits on single spaces
pub fn alternate_words(text: &str) -> String {
    text.split(' ')
        .enumerate()
        .map(|(i, w)| if i % 2 == 0 { w.to_lowercase() } else { w.to_uppercase() })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Facts derived from one sentence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manipulation {
    pub length: usize,
    pub last_char: char,
    /// Every occurrence of the last character replaced by `@`
    pub replaced: String,
    pub last_three_reversed: String,
    /// First three characters followed by the last two
    pub five_letter: String,
}

impl Manipulation {
    pub fn of(sentence: &str) -> Result<Self> {
        let chars: Vec<char> = sentence.chars().collect();
        let Some(&last_char) = chars.last() else {
            return Err(BootcampError::InvalidInput("sentence is empty".to_string()));
        };

        let length = chars.len();
        let replaced = sentence.replace(last_char, "@");
        let last_three_reversed = chars.iter().rev().take(3).collect();
        let head: String = chars.iter().take(3).collect();
        let tail: String = chars[length.saturating_sub(2)..].iter().collect();

        Ok(Self {
            length,
            last_char,
            replaced,
            last_three_reversed,
            five_letter: format!("{}{}", head, tail),
        })
    }
}

pub fn run_vocab(term: &mut Terminal) -> Result<()> {
    let word = term.ask_nonempty("Give me a word to negate with 'un':")?;
    term.say(format!("add_prefix_un: {}", add_prefix_un(word.trim())))?;

    let noun = term.ask_nonempty("Give me a word ending in 'ness':")?;
    term.say(format!("remove_suffix_ness: {}", remove_suffix_ness(noun.trim())))?;

    let group = term.ask_nonempty("Give me a prefix followed by some words, separated by spaces:")?;
    let vocab: Vec<&str> = group.split_whitespace().collect();
    term.say(format!("make_word_groups: {}", make_word_groups(&vocab)))?;

    let sentence = term.ask_nonempty("Give me a sentence containing an adjective:")?;
    loop {
        let index = term.ask_int("Which word is the adjective? (0 is the first, -1 the last)")?;
        match adjective_to_verb(&sentence, index) {
            Ok(verb) => return term.say(format!("adjective_to_verb: {}", verb)),
            Err(BootcampError::InvalidInput(reason)) => term.warn(&format!("{}.", reason))?,
            Err(e) => return Err(e),
        }
    }
}

pub fn run_alternate(term: &mut Terminal) -> Result<()> {
    let sentence = term.ask_text("Give me a word or sentence:")?;
    term.say(alternate_characters(&sentence))?;
    term.say(alternate_words(&sentence))
}

pub fn run_manipulate(term: &mut Terminal) -> Result<()> {
    let sentence = term.ask_nonempty("Enter a sentence:")?;
    let m = Manipulation::of(&sentence)?;

    term.say(format!("Length of your sentence: {} characters.", m.length))?;
    term.say(format!("Last letter in your sentence: {}", m.last_char))?;
    term.say(format!("Replacing that character with @: {}", m.replaced))?;
    term.say(format!(
        "The last three characters in your sentence backwards: {}",
        m.last_three_reversed
    ))?;
    term.say(format!(
        "The first three letters in your sentence then the last two letters, making a five-letter word: {}",
        m.five_letter
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_prefix_un() {
        assert_eq!(add_prefix_un("happy"), "unhappy");
        assert_eq!(add_prefix_un("manageable"), "unmanageable");
    }

    #[test]
    fn test_make_word_groups() {
        assert_eq!(
            make_word_groups(&["en", "close", "joy", "lighten"]),
            "en :: enclose :: enjoy :: enlighten"
        );
        assert_eq!(
            make_word_groups(&["inter", "twine", "connected", "dependent"]),
            "inter :: intertwine :: interconnected :: interdependent"
        );
        assert_eq!(make_word_groups(&["pre"]), "pre");
        assert_eq!(make_word_groups::<&str>(&[]), "");
    }

    #[test]
    fn test_remove_suffix_ness() {
        assert_eq!(remove_suffix_ness("heaviness"), "heavy");
        assert_eq!(remove_suffix_ness("sadness"), "sad");
        assert_eq!(remove_suffix_ness("happy"), "happy");
    }

    #[test]
    fn test_adjective_to_verb() {
        assert_eq!(adjective_to_verb("I need to make that bright.", -1).unwrap(), "brighten");
        assert_eq!(adjective_to_verb("It got dark as the sun set.", 2).unwrap(), "darken");
        assert!(adjective_to_verb("Too short.", 5).is_err());
        assert!(adjective_to_verb("Too short.", -3).is_err());
    }

    #[test]
    fn test_alternate_case() {
        assert_eq!(alternate_characters("hello world"), "HeLlO WoRlD");
        assert_eq!(alternate_words("I am learning to code"), "i AM learning TO code");
    }

    #[test]
    fn test_manipulation_example() {
        let m = Manipulation::of("This is a bunch of words").unwrap();
        assert_eq!(m.length, 24);
        assert_eq!(m.last_char, 's');
        assert_eq!(m.replaced, "Thi@ i@ a bunch of word@");
        assert_eq!(m.last_three_reversed, "sdr");
        assert_eq!(m.five_letter, "Thids");
    }

    #[test]
    fn test_manipulation_short_and_empty() {
        let m = Manipulation::of("ab").unwrap();
        assert_eq!(m.last_three_reversed, "ba");
        assert_eq!(m.five_letter, "abab");
        assert!(Manipulation::of("").is_err());
    }

    #[test]
    fn test_run_vocab_reprompts_index() {
        let (mut term, out) = Terminal::scripted([
            "kind",
            "happiness",
            "auto didactic graph",
            "Make it bright.",
            "7",
            "-1",
        ]);
        run_vocab(&mut term).unwrap();
        let text = out.contents();
        assert!(text.contains("add_prefix_un: unkind"));
        assert!(text.contains("remove_suffix_ness: happy"));
        assert!(text.contains("make_word_groups: auto :: autodidactic :: autograph"));
        assert!(text.contains("out of range"));
        assert!(text.contains("adjective_to_verb: brighten"));
    }
}
