//! Age classifier
//!
//! Ranges overlap, so the order of the checks matters: the first matching
//! bracket wins.

use crate::console::Terminal;
use crate::errors::Result;

/// Age bracket, in the order the checks run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeBracket {
    Dead,
    Retired,
    OverTheHill,
    TwentyFirst,
    Kiddie,
    Other,
}

impl AgeBracket {
    pub fn message(&self) -> &'static str {
        match self {
            AgeBracket::Dead => "Sorry, you're dead.",
            AgeBracket::Retired => "Enjoy your retirement!",
            AgeBracket::OverTheHill => "You're over the hill.",
            AgeBracket::TwentyFirst => "Congrats on your 21st!",
            AgeBracket::Kiddie => "You qualify for the kiddie discount.",
            AgeBracket::Other => "Age is but a number.",
        }
    }
}

/// Oldest age anyone can be
pub const MAX_AGE: i64 = 100;

pub fn classify_age(age: i64) -> AgeBracket {
    if age > MAX_AGE {
        AgeBracket::Dead
    } else if age >= 65 {
        AgeBracket::Retired
    } else if age >= 40 {
        AgeBracket::OverTheHill
    } else if age == 21 {
        AgeBracket::TwentyFirst
    } else if age < 13 {
        AgeBracket::Kiddie
    } else {
        AgeBracket::Other
    }
}

pub fn run(term: &mut Terminal) -> Result<()> {
    let age = term.ask_int("What is your age in years?")?;
    term.say(classify_age(age).message())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ladder_messages() {
        assert_eq!(classify_age(101).message(), "Sorry, you're dead.");
        assert_eq!(classify_age(65).message(), "Enjoy your retirement!");
        assert_eq!(classify_age(21).message(), "Congrats on your 21st!");
        assert_eq!(classify_age(12).message(), "You qualify for the kiddie discount.");
        assert_eq!(classify_age(30).message(), "Age is but a number.");
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(classify_age(100), AgeBracket::Retired);
        assert_eq!(classify_age(64), AgeBracket::OverTheHill);
        assert_eq!(classify_age(40), AgeBracket::OverTheHill);
        assert_eq!(classify_age(39), AgeBracket::Other);
        assert_eq!(classify_age(13), AgeBracket::Other);
        assert_eq!(classify_age(-3), AgeBracket::Kiddie);
    }

    #[test]
    fn test_run_reprompts_on_text() {
        let (mut term, out) = Terminal::scripted(["old", "70"]);
        run(&mut term).unwrap();
        let text = out.contents();
        assert!(text.contains("Please enter a whole number."));
        assert!(text.contains("Enjoy your retirement!"));
    }
}
