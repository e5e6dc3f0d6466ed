//! Daily word selection
//!
//! Every player gets the same secret word for a given UTC calendar date. The
//! caller always supplies the date; nothing here reads the clock.

mod reset;
mod selector;

pub use reset::{format_countdown, next_daily_reset, time_until_next_daily};
pub use selector::{calendar_date, daily_seed, select_daily_index, select_daily_word};
