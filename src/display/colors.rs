use crossterm::style::Color;

pub fn header_fg() -> Color {
    Color::AnsiValue(21)
} // Bright blue
pub fn section_fg() -> Color {
    Color::AnsiValue(46)
} // Bright green
pub fn text_fg() -> Color {
    Color::AnsiValue(231)
} // Pure white
pub fn abbreviation_fg() -> Color {
    Color::AnsiValue(51)
} // Bright cyan
pub fn score_fg() -> Color {
    Color::AnsiValue(226)
} // Bright yellow
pub fn error_fg() -> Color {
    Color::AnsiValue(196)
} // Bright red
