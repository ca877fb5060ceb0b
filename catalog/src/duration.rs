//! Parser for the compact duration encoding used by `contentDetails.duration`.
//!
//! Values look like `PT1H2M3S`: a `P` marker, an optional day segment, then an
//! optional `T` followed by hour, minute and second segments in that order.
//! Each segment is a run of digits terminated by its unit letter, and any of
//! them may be absent.
//!
//! The scanner walks the input once. Digits accumulate into a pending run;
//! every non-digit character closes the run and drives a transition:
//!
//! | state      | input | next state         | effect                                   |
//! |------------|-------|--------------------|------------------------------------------|
//! | `Start`    | `P`   | `Date`             |                                          |
//! | `Date`     | `D`   | `Days`             | run (non-empty) × 86400                  |
//! | `Date`     | `T`   | `Time(None)`       | run must be empty                        |
//! | `Days`     | `T`   | `Time(None)`       | run must be empty                        |
//! | `Time(u)`  | `H`   | `Time(Hours)`      | `u` < hours; run (non-empty) × 3600      |
//! | `Time(u)`  | `M`   | `Time(Minutes)`    | `u` < minutes; run × 60, empty run is 0  |
//! | `Time(M)`  | `S`   | `Time(Seconds)`    | full run (non-empty)                     |
//! | `Time(u)`  | `S`   | `Time(Seconds)`    | `u` < minutes; run of at most 2 digits   |
//!
//! Anything else is rejected, as are digits left over at the end of input.
//!
//! Seconds are the full digit run when a minute segment was seen. Without one,
//! seconds come from a fixed two-character window in front of `S`, since the
//! encoding never emits more than two digits there. A reader that blindly slices
//! that window turns `PT100S` into `00`, i.e. 0 seconds; here a wider run is a
//! [`Reason::WideSeconds`] error instead.
//!
//! The empty string parses as zero, which is what an enriched record carries
//! when the service omitted the duration altogether.

const SECONDS_PER_DAY: u64 = 86_400;
const SECONDS_PER_HOUR: u64 = 3_600;
const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_WINDOW: usize = 2;

/// A duration string that does not follow the encoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid duration {input:?}: {reason}")]
pub struct DurationError {
    input: String,
    reason: Reason,
}

impl DurationError {
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn reason(&self) -> Reason {
        self.reason
    }
}

/// Why a duration was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Reason {
    #[error("missing `P` marker")]
    MissingMarker,
    #[error("unexpected {0:?} at offset {1}")]
    Unexpected(char, usize),
    #[error("`{0}` segment has no digits")]
    EmptySegment(char),
    #[error("seconds wider than two digits without a minutes segment")]
    WideSeconds,
    #[error("trailing digits without a unit")]
    Unterminated,
    #[error("value overflows")]
    Overflow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Unit {
    Hours,
    Minutes,
    Seconds,
}

impl Unit {
    fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'H' => Some(Self::Hours),
            'M' => Some(Self::Minutes),
            'S' => Some(Self::Seconds),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    Date,
    Days,
    /// Inside the time part; holds the last unit consumed.
    Time(Option<Unit>),
}

/// Converts an encoded duration into whole seconds.
pub fn parse(encoded: &str) -> Result<u64, DurationError> {
    if encoded.is_empty() {
        return Ok(0);
    }

    let fail = |reason| DurationError {
        input: encoded.to_string(),
        reason,
    };

    let mut state = State::Start;
    let mut run_start: Option<usize> = None;
    let mut saw_minutes = false;
    let mut total: u64 = 0;

    for (offset, c) in encoded.char_indices() {
        if c.is_ascii_digit() && state != State::Start {
            run_start.get_or_insert(offset);
            continue;
        }

        let digits = run_start.take().map_or("", |start| &encoded[start..offset]);

        state = match (state, c) {
            (State::Start, 'P') => State::Date,
            (State::Start, _) => return Err(fail(Reason::MissingMarker)),
            (State::Date, 'D') => {
                let days = required(digits, 'D').map_err(fail)?;
                total = accumulate(total, days, SECONDS_PER_DAY).map_err(fail)?;
                State::Days
            }
            (State::Date | State::Days, 'T') if digits.is_empty() => State::Time(None),
            (State::Time(last), letter) => {
                let unit = Unit::from_letter(letter)
                    .filter(|unit| Some(*unit) > last)
                    .ok_or_else(|| fail(Reason::Unexpected(letter, offset)))?;
                let (value, scale) = match unit {
                    Unit::Hours => (required(digits, 'H').map_err(fail)?, SECONDS_PER_HOUR),
                    Unit::Minutes => {
                        saw_minutes = true;
                        (optional(digits).map_err(fail)?, SECONDS_PER_MINUTE)
                    }
                    Unit::Seconds if saw_minutes => (required(digits, 'S').map_err(fail)?, 1),
                    Unit::Seconds => (windowed_seconds(digits).map_err(fail)?, 1),
                };
                total = accumulate(total, value, scale).map_err(fail)?;
                State::Time(Some(unit))
            }
            (_, _) => return Err(fail(Reason::Unexpected(c, offset))),
        };
    }

    if run_start.is_some() {
        return Err(fail(Reason::Unterminated));
    }
    Ok(total)
}

fn required(digits: &str, unit: char) -> Result<u64, Reason> {
    if digits.is_empty() {
        return Err(Reason::EmptySegment(unit));
    }
    digits.parse().map_err(|_| Reason::Overflow)
}

fn optional(digits: &str) -> Result<u64, Reason> {
    if digits.is_empty() {
        return Ok(0);
    }
    digits.parse().map_err(|_| Reason::Overflow)
}

fn windowed_seconds(digits: &str) -> Result<u64, Reason> {
    if digits.len() > SECONDS_WINDOW {
        return Err(Reason::WideSeconds);
    }
    required(digits, 'S')
}

fn accumulate(total: u64, value: u64, scale: u64) -> Result<u64, Reason> {
    value
        .checked_mul(scale)
        .and_then(|seconds| total.checked_add(seconds))
        .ok_or(Reason::Overflow)
}
