//! Lightweight text processing: tokens, stop words, similarity and the
//! movie recommender built on them

pub mod recommend;
pub mod similarity;
pub mod stopwords;
pub mod tokenize;

pub use recommend::{load_movies, parse_movies, recommend, Movie};
pub use similarity::cosine_similarity;
pub use stopwords::is_stop_word;
pub use tokenize::{content_words, preprocess, tokenize, words, Token, TokenKind};
