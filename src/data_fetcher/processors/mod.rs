pub mod schedule;
pub mod time_formatting;

pub use schedule::{
    Classification, classify_events, classify_game, extract_side, is_event_completed,
    normalize_event,
};
pub use time_formatting::{format_game_time, format_game_time_in, parse_event_date};
