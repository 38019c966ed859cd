//! Triathlon award calculator
//!
//! Awards are tiers measured from a fixed qualifying time.

use crate::console::Terminal;
use crate::errors::{BootcampError, Result};

/// Qualifying time for awards, in minutes
pub const QUALIFYING_MINUTES: i64 = 100;
/// Half colours cut-off above the qualifying time
pub const HALF_COLOURS_OFFSET: i64 = 5;
/// Scroll cut-off above the qualifying time
pub const SCROLL_OFFSET: i64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Award {
    ProvincialColours,
    ProvincialHalfColours,
    ProvincialScroll,
    NoAward,
    /// Negative total: the times were entered wrongly
    InvalidTime,
}

impl Award {
    /// Award name as printed on the certificate
    pub fn name(&self) -> Option<&'static str> {
        match self {
            Award::ProvincialColours => Some("Provincial Colours"),
            Award::ProvincialHalfColours => Some("Provincial Half Colours"),
            Award::ProvincialScroll => Some("Provincial Scroll"),
            Award::NoAward | Award::InvalidTime => None,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Award::ProvincialColours => format!(
                "Within the qualifying time of {}mins or less. Provincial Colours awarded.",
                QUALIFYING_MINUTES
            ),
            Award::ProvincialHalfColours => format!(
                "Within {} mins above qualifying time of {}mins. Provincial Half Colours awarded.",
                HALF_COLOURS_OFFSET, QUALIFYING_MINUTES
            ),
            Award::ProvincialScroll => format!(
                "Within {} mins above qualifying time of {}mins. Provincial Scroll awarded.",
                SCROLL_OFFSET, QUALIFYING_MINUTES
            ),
            Award::NoAward => format!(
                "More than {} mins off qualifying time of {}mins. No award.",
                SCROLL_OFFSET, QUALIFYING_MINUTES
            ),
            Award::InvalidTime => {
                "Time taken must be more than 0 mins. Input times again.".to_string()
            }
        }
    }
}

pub fn total_time(swim: i64, cycle: i64, run: i64) -> Result<i64> {
    swim.checked_add(cycle)
        .and_then(|t| t.checked_add(run))
        .ok_or_else(|| BootcampError::Overflow(format!("{} + {} + {} minutes", swim, cycle, run)))
}

pub fn classify_award(total: i64) -> Award {
    if total > QUALIFYING_MINUTES + SCROLL_OFFSET {
        Award::NoAward
    } else if total > QUALIFYING_MINUTES + HALF_COLOURS_OFFSET {
        Award::ProvincialScroll
    } else if total > QUALIFYING_MINUTES {
        Award::ProvincialHalfColours
    } else if total >= 0 {
        Award::ProvincialColours
    } else {
        Award::InvalidTime
    }
}

pub fn run(term: &mut Terminal) -> Result<()> {
    let total = loop {
        let swim = term.ask_int("How many minutes did the swim take the triathlete?")?;
        let cycle = term.ask_int("How many minutes did the cycle take the triathlete?")?;
        let run = term.ask_int("How many minutes did the run take the triathlete?")?;

        match total_time(swim, cycle, run) {
            Ok(total) => break total,
            Err(BootcampError::Overflow(_)) => {
                term.warn("Those times are too large to add up. Input times again.")?
            }
            Err(e) => return Err(e),
        }
    };
    term.say(format!("Triathlon total time taken: {} minutes.", total))?;
    term.say(classify_award(total).message())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_award_tiers() {
        assert_eq!(classify_award(95).name(), Some("Provincial Colours"));
        assert_eq!(classify_award(103).name(), Some("Provincial Half Colours"));
        assert_eq!(classify_award(108).name(), Some("Provincial Scroll"));
        assert_eq!(classify_award(120), Award::NoAward);
        assert_eq!(classify_award(120).name(), None);
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(classify_award(100), Award::ProvincialColours);
        assert_eq!(classify_award(101), Award::ProvincialHalfColours);
        assert_eq!(classify_award(105), Award::ProvincialHalfColours);
        assert_eq!(classify_award(106), Award::ProvincialScroll);
        assert_eq!(classify_award(110), Award::ProvincialScroll);
        assert_eq!(classify_award(111), Award::NoAward);
        assert_eq!(classify_award(0), Award::ProvincialColours);
        assert_eq!(classify_award(-1), Award::InvalidTime);
    }

    #[test]
    fn test_total_time_overflow() {
        assert_eq!(total_time(30, 40, 33).unwrap(), 103);
        assert!(matches!(total_time(i64::MAX, 1, 0), Err(BootcampError::Overflow(_))));
        assert!(matches!(total_time(i64::MIN, 0, -1), Err(BootcampError::Overflow(_))));
    }

    #[test]
    fn test_run_reasks_after_overflow() {
        let (mut term, out) = Terminal::scripted(["9223372036854775807", "1", "0", "30", "40", "33"]);
        run(&mut term).unwrap();
        let text = out.contents();
        assert!(text.contains("too large to add up"));
        assert!(text.contains("Triathlon total time taken: 103 minutes."));
    }

    #[test]
    fn test_run_prints_total_and_award() {
        let (mut term, out) = Terminal::scripted(["30", "50", "23"]);
        run(&mut term).unwrap();
        let text = out.contents();
        assert!(text.contains("Triathlon total time taken: 103 minutes."));
        assert!(text.contains("Provincial Half Colours awarded."));
    }
}
