//! Integration tests for tokenizing, similarity and the movie recommender

use bootcamp::cli::{Commands, Config};
use bootcamp::console::Terminal;
use bootcamp::dispatch;
use bootcamp::text::{
    content_words, cosine_similarity, is_stop_word, load_movies, preprocess, recommend, tokenize,
};
use quickcheck_macros::quickcheck;
use std::path::PathBuf;
use tempfile::TempDir;

const MOVIES: &str = "\
Movie A :When Hiccup discovers Toothless isn't the only Night Fury, he must seek 'The One' to join him in a hidden world.
Movie B :After the death of Superman, several new people present themselves as possible successors.
Movie C :A darkness swirls at the center of a world-building space adventure, as a hero is trained to fight on a distant planet.

Movie D :A shark terrorises a beach town and the police chief hunts it with a scientist and a fisherman.
";

fn movies_file(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("movies.txt");
    std::fs::write(&path, MOVIES).unwrap();
    path
}

#[test]
fn test_preprocess_example() {
    assert_eq!(preprocess("this is the first review in lowercase."), "review lowercase");
}

#[test]
fn test_tokens_split_punctuation() {
    let tokens: Vec<String> = tokenize("Hello, world!").into_iter().map(|t| t.text).collect();
    assert_eq!(tokens, vec!["Hello", ",", "world", "!"]);
}

#[test]
fn test_stop_words() {
    assert!(is_stop_word("The"));
    assert!(is_stop_word("first"));
    assert!(!is_stop_word("tablet"));
}

#[test]
fn test_similarity_bounds() {
    assert!((cosine_similarity("great battery life", "great battery life") - 1.0).abs() < 1e-9);
    assert_eq!(cosine_similarity("great battery", "awful screen"), 0.0);
    assert_eq!(cosine_similarity("", "anything"), 0.0);
}

#[test]
fn test_recommend_from_file() {
    let dir = TempDir::new().unwrap();
    let movies = load_movies(&movies_file(&dir)).unwrap();
    assert_eq!(movies.len(), 4);

    let (best, score) =
        recommend("A hero fights a darkness on a distant planet in space", &movies).unwrap();
    assert_eq!(best.title, "Movie C");
    assert!(score > 0.0 && score <= 1.0);

    assert!(recommend("zzz qqq", &movies).is_none());
}

#[test]
fn test_recommend_command_uses_default_description() {
    let dir = TempDir::new().unwrap();
    let movies = movies_file(&dir);
    let (mut term, out) = Terminal::scripted([""]);

    dispatch(&Commands::Recommend { movies }, &mut term, &Config::default()).unwrap();

    let text = out.contents();
    assert!(text.contains("Sakaar"));
    assert!(text.contains("Recommended movie to watch next: Movie C"));
}

#[test]
fn test_recommend_command_missing_file() {
    let dir = TempDir::new().unwrap();
    let (mut term, _out) = Terminal::scripted([""]);
    let result = dispatch(
        &Commands::Recommend {
            movies: dir.path().join("missing.txt"),
        },
        &mut term,
        &Config::default(),
    );
    assert!(result.is_err());
}

#[test]
fn test_malformed_movie_line_is_named() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("movies.txt");
    std::fs::write(&path, "Movie A :fine\nno separator here\n").unwrap();
    let err = load_movies(&path).unwrap_err();
    assert!(err.to_string().contains("line 2"));
}

#[quickcheck]
fn prop_similarity_in_unit_range(a: String, b: String) -> bool {
    let s = cosine_similarity(&a, &b);
    (0.0..=1.0).contains(&s)
}

#[quickcheck]
fn prop_similarity_symmetric(a: String, b: String) -> bool {
    (cosine_similarity(&a, &b) - cosine_similarity(&b, &a)).abs() < 1e-9
}

#[quickcheck]
fn prop_preprocess_has_no_stop_words(text: String) -> bool {
    preprocess(&text).split(' ').filter(|w| !w.is_empty()).all(|w| !is_stop_word(w))
}

#[quickcheck]
fn prop_content_words_are_lowercase(text: String) -> bool {
    content_words(&text).iter().all(|w| *w == w.to_lowercase())
}
