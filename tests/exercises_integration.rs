//! Integration tests for the console exercises
//!
//! Drives each exercise through a scripted terminal and checks the printed
//! output, plus property checks for the pure helpers.

use bootcamp::cli::{Commands, Config};
use bootcamp::console::Terminal;
use bootcamp::dispatch;
use bootcamp::exercises::{
    add_prefix_un, alternate_characters, alternate_words, arrow, calculate_average, classify_award,
    factorial, holiday_cost, make_word_groups, remove_suffix_ness, Award, Manipulation,
};
use bootcamp::BootcampError;
use quickcheck_macros::quickcheck;

fn run_script(command: Commands, answers: &[&str]) -> String {
    let (mut term, out) = Terminal::scripted(answers.iter().copied());
    dispatch(&command, &mut term, &Config::default()).unwrap();
    out.contents()
}

// Scripted runs

#[test]
fn test_age_exercise() {
    assert!(run_script(Commands::Age, &["101"]).contains("Sorry, you're dead."));
    assert!(run_script(Commands::Age, &["12"]).contains("kiddie discount"));
}

#[test]
fn test_award_exercise() {
    let text = run_script(Commands::Award, &["30", "40", "33"]);
    assert!(text.contains("Triathlon total time taken: 103 minutes."));
    assert!(text.contains("Provincial Half Colours awarded."));
}

#[test]
fn test_award_reasks_when_times_overflow() {
    let text = run_script(Commands::Award, &["9223372036854775807", "1", "0", "30", "40", "33"]);
    assert!(text.contains("too large to add up"));
    assert!(text.contains("Triathlon total time taken: 103 minutes."));
}

#[test]
fn test_holiday_exercise() {
    let text = run_script(Commands::Holiday, &["Astrolabe", "3", "two", "2"]);
    assert!(text.contains("ASTROLABE"));
    assert!(text.contains("Please enter a whole number."));
    assert!(text.contains("£600.00"));
}

#[test]
fn test_triangle_reasks_until_valid() {
    let text = run_script(Commands::Triangle, &["1", "2", "10", "3", "4", "5"]);
    assert!(text.contains("Try again."));
    assert!(text.contains("Your triangle has area = 6"));
}

#[test]
fn test_factorial_exercise() {
    assert!(run_script(Commands::Factorial, &["5"]).contains("5! = 120"));
    assert!(run_script(Commands::Factorial, &["25"]).contains("Too big"));
}

#[test]
fn test_average_exercise() {
    let text = run_script(Commands::Average, &["2", "4", "nine", "6", "-1"]);
    assert!(text.contains("Please enter a number."));
    assert!(text.contains("3 numbers supplied."));
    assert!(text.contains("Avg: 4.0000."));

    let empty = run_script(Commands::Average, &["-1"]);
    assert!(empty.contains("No numbers supplied."));
}

#[test]
fn test_pattern_exercise() {
    let text = run_script(Commands::Pattern, &["5"]);
    assert!(text.contains("*****"));
    assert!(!text.contains("******"));
}

#[test]
fn test_manipulate_exercise() {
    let text = run_script(Commands::Manipulate, &["This is a bunch of words"]);
    assert!(text.contains("Thi@ i@ a bunch of word@"));
    assert!(text.contains("sdr"));
    assert!(text.contains("Thids"));
}

#[test]
fn test_garden_builtin_sentences() {
    let text = run_script(Commands::Garden { file: None }, &[]);
    assert!(text.contains("Mary gave the child a Band-Aid."));
}

#[test]
fn test_garden_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sentences.txt");
    std::fs::write(&path, "The old man the boat.\n\nThe horse raced past the barn fell.\n").unwrap();

    let text = run_script(Commands::Garden { file: Some(path) }, &[]);
    assert!(text.contains("The old man the boat."));
    assert!(text.contains("barn"));
}

#[test]
fn test_closed_input_surfaces() {
    let (mut term, _out) = Terminal::scripted(["3"]);
    let err = dispatch(&Commands::Award, &mut term, &Config::default()).unwrap_err();
    assert!(matches!(err, BootcampError::InputClosed { .. }));
}

// Pure functions

#[test]
fn test_vocabulary_helpers() {
    assert_eq!(add_prefix_un("happy"), "unhappy");
    assert_eq!(remove_suffix_ness("heaviness"), "heavy");
    assert_eq!(remove_suffix_ness("sadness"), "sad");
    assert_eq!(make_word_groups(&["en", "close", "joy"]), "en :: enclose :: enjoy");
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
fn test_holiday_totals() {
    assert_eq!(holiday_cost("astrolabe", 3, 2), 600.0);
    assert_eq!(holiday_cost("nowhere", 0, 0), 500.0);
}

#[test]
fn test_award_tiers() {
    assert_eq!(classify_award(95), Award::ProvincialColours);
    assert_eq!(classify_award(103), Award::ProvincialHalfColours);
    assert_eq!(classify_award(108), Award::ProvincialScroll);
    assert_eq!(classify_award(120), Award::NoAward);
}

// Properties

#[quickcheck]
fn prop_prefix_then_strip(word: String) -> bool {
    add_prefix_un(&word).strip_prefix("un") == Some(word.as_str())
}

#[quickcheck]
fn prop_ness_round_trip(stem: String) -> bool {
    // Stems ending in "i" or "y" are rewritten by the iness rule
    if stem.ends_with('i') || stem.ends_with('y') {
        return true;
    }
    remove_suffix_ness(&format!("{}ness", stem)) == stem
}

#[quickcheck]
fn prop_alternate_characters_keeps_char_count(text: String) -> bool {
    if !text.is_ascii() {
        return true;
    }
    alternate_characters(&text).len() == text.len()
}

#[quickcheck]
fn prop_alternate_words_keeps_word_count(text: String) -> bool {
    alternate_words(&text).split(' ').count() == text.split(' ').count()
}

#[quickcheck]
fn prop_arrow_shape(width: u8) -> bool {
    let width = usize::from(width % 40);
    let lines = arrow(width);
    let expected = if width == 0 { 0 } else { 2 * width - 1 };
    lines.len() == expected && lines.iter().all(|l| l.len() <= width)
}

#[quickcheck]
fn prop_average_between_bounds(values: Vec<i16>) -> bool {
    let numbers: Vec<f64> = values.iter().map(|v| f64::from(*v)).collect();
    match calculate_average(&numbers) {
        None => numbers.is_empty(),
        Some(avg) => {
            let min = numbers.iter().cloned().fold(f64::INFINITY, f64::min);
            let max = numbers.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            avg >= min - 1e-9 && avg <= max + 1e-9
        }
    }
}

#[quickcheck]
fn prop_factorial_recurrence(n: u8) -> bool {
    let n = u64::from(n % 20) + 1;
    match (factorial(n), factorial(n - 1)) {
        (Ok(a), Ok(b)) => a == n * b,
        _ => false,
    }
}
