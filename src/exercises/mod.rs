//! Small console exercises
//!
//! Each module pairs pure functions with a `run` flow that prompts through
//! a [`Terminal`](crate::console::Terminal).

pub mod age;
pub mod award;
pub mod cafe;
pub mod garden;
pub mod holiday;
pub mod numbers;
pub mod pattern;
pub mod words;

pub use age::{classify_age, AgeBracket};
pub use award::{classify_award, total_time, Award};
pub use cafe::{StockItem, StockTable};
pub use holiday::{car_rental, holiday_cost, hotel_cost, plane_cost, HolidayQuote};
pub use numbers::{calculate_average, factorial, triangle_area, Averager};
pub use pattern::arrow;
pub use words::{
    add_prefix_un, adjective_to_verb, alternate_characters, alternate_words, make_word_groups,
    remove_suffix_ness, Manipulation,
};
