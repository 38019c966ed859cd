//! Holiday expense calculator

use crate::console::display::{center, money, rule};
use crate::console::Terminal;
use crate::errors::Result;

pub const HOTEL_PER_NIGHT: f64 = 100.0;
pub const CAR_PER_DAY: f64 = 50.0;
/// Flight price for any destination not on the list
pub const DEFAULT_FLIGHT: f64 = 500.0;

const FLIGHTS: &[(&str, &str, f64)] = &[
    ("astrolabe", "a", 200.0),
    ("bangaroo", "b", 300.0),
    ("carnidingle", "c", 400.0),
];

const BANNER: &str = r#"
         S   E   V    E   N             P    E    N    G    U    I   N    S
      __        __        __        __         __        __        __
    _|__|_    _|__|_    _|__|_    _|__|_     _|__|_    _|__|_    _|__|_
     ( o>      ( o>      ( o>      ( o>       ( o>      ( o>      ( o>

   T  R   A   V   E   L             A   G   E   N   T  S
"#;

pub fn hotel_cost(nights: u32) -> f64 {
    f64::from(nights) * HOTEL_PER_NIGHT
}

pub fn car_rental(days: u32) -> f64 {
    f64::from(days) * CAR_PER_DAY
}

/// Flight price by city name or its initial, case-insensitive
pub fn plane_cost(city: &str) -> f64 {
    let city = city.trim().to_lowercase();
    FLIGHTS
        .iter()
        .find(|(name, short, _)| city == *name || city == *short)
        .map(|(_, _, price)| *price)
        .unwrap_or(DEFAULT_FLIGHT)
}

pub fn holiday_cost(city: &str, nights: u32, rental_days: u32) -> f64 {
    hotel_cost(nights) + plane_cost(city) + car_rental(rental_days)
}

/// A priced holiday
#[derive(Debug, Clone, PartialEq)]
pub struct HolidayQuote {
    pub city: String,
    pub nights: u32,
    pub rental_days: u32,
}

impl HolidayQuote {
    pub fn new(city: &str, nights: u32, rental_days: u32) -> Self {
        Self {
            city: city.trim().to_lowercase(),
            nights,
            rental_days,
        }
    }

    pub fn total(&self) -> f64 {
        holiday_cost(&self.city, self.nights, self.rental_days)
    }

    /// Boxed cost summary, `width` columns wide
    pub fn summary(&self, currency: &str, width: usize) -> Vec<String> {
        vec![
            rule(width, '='),
            center("HOLIDAY COST SUMMARY", width, ' '),
            rule(width, '='),
            format!(
                "{:<30}{:<19}|{:>30}",
                "Destination: ",
                self.city.to_uppercase(),
                format!("Flight Cost: {}", money(currency, plane_cost(&self.city)))
            ),
            format!(
                "{:<30}{:<19}|{:>30}",
                "Hotel stay: ",
                format!("{} nights", self.nights),
                format!("Cost: {}", money(currency, hotel_cost(self.nights)))
            ),
            format!(
                "{:<30}{:<19}|{:>30}",
                "Car rental: ",
                format!("{} days", self.rental_days),
                format!("Cost: {}", money(currency, car_rental(self.rental_days)))
            ),
            rule(width, '-'),
            format!(
                "{:<50}{:>30}",
                "Total cost of your holiday:",
                money(currency, self.total())
            ),
            rule(width, '='),
            center(
                "Remember, the best things in life are free. The second best are very expensive.",
                width,
                ' ',
            ),
            center(
                "So, enjoy your holiday, from all of us here at Seven Penguins!",
                width,
                ' ',
            ),
            rule(width, '='),
        ]
    }
}

pub fn run(term: &mut Terminal) -> Result<()> {
    let width = term.width();
    let currency = term.currency().to_string();

    term.say(rule(width, '='))?;
    term.say(BANNER)?;
    term.say(rule(width, '='))?;
    term.say(center(" Holiday Expense Calculator Tool ", width, '~'))?;
    term.say(rule(width, '='))?;

    term.say(format!(
        "Flight options: Astrolabe ({}), Bangaroo ({}), Carnidingle ({})",
        money(&currency, 200.0),
        money(&currency, 300.0),
        money(&currency, 400.0)
    ))?;
    term.say(format!("All other destinations: {}", money(&currency, DEFAULT_FLIGHT)))?;

    let city = term.ask_nonempty("Enter the city you will be flying to:")?;
    let nights: u32 = term.ask_parsed(
        "Enter the number of nights you will be staying at a hotel:",
        "Please enter a whole number.",
    )?;
    let days: u32 = term.ask_parsed(
        "Enter the number of days for which you will be hiring a car:",
        "Please enter a whole number.",
    )?;

    let quote = HolidayQuote::new(&city, nights, days);
    term.blank()?;
    for line in quote.summary(&currency, width) {
        term.say(line)?;
    }
    Ok(())
}
