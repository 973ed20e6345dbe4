//! Glyph ramps, ordered from the glyph used for the darkest cell to the one
//! used for the brightest cell on a dark terminal background.
//!
//! `reverse_polarity` walks the same ramp backwards. None of the ramps is a
//! palindrome, so flipping polarity always changes non-uniform output.
use crate::options::RampMode;

const ASCII_RAMP: &str =
    " .`^,:;Il!i><~+_-?][}{1)(|\\/tfjrxnuvczXYUJCLQ0OZmwqpdbkhao*#MW&8%B@$";
const UNICODE_RAMP: &str = " '`^.\",!;:~-=+*#$%&@□■░▒▓▏▎▍▌▋▊▉█";
const DOTS_RAMP: &str = " ⣀⣄⣆⣇⣧⣷⣿";
const RECTANGLES_RAMP: &str = " ░▒▓█";
const BARS_RAMP: &str = " ▁▂▃▄▅▆▇█";
const LOADING_RAMP: &str = " ▏▎▍▌▋▊▉█";

/// Directional glyphs: horizontal, diagonal-down, vertical, diagonal-up.
pub const PLAIN_DIRECTIONAL: [char; 4] = ['-', '\\', '|', '/'];
pub const BOX_DIRECTIONAL: [char; 4] = ['─', '╲', '│', '╱'];

/// Ramp string of `mode` in its normal (dark-to-bright) order.
pub fn ramp_str(mode: RampMode) -> &'static str {
    match mode {
        RampMode::Ascii => ASCII_RAMP,
        RampMode::Unicode => UNICODE_RAMP,
        RampMode::Dots => DOTS_RAMP,
        RampMode::Rectangles => RECTANGLES_RAMP,
        RampMode::Bars => BARS_RAMP,
        RampMode::Loading => LOADING_RAMP,
    }
}

/// Glyphs of `mode`, reversed when `reverse_polarity` is set.
pub fn ramp(mode: RampMode, reverse_polarity: bool) -> Vec<char> {
    let chars = ramp_str(mode).chars();
    if reverse_polarity {
        chars.rev().collect()
    } else {
        chars.collect()
    }
}

/// Directional set for `mode`: plain text for ASCII, box drawing otherwise.
pub fn directional_glyphs(mode: RampMode) -> [char; 4] {
    if mode.is_plain_text() {
        PLAIN_DIRECTIONAL
    } else {
        BOX_DIRECTIONAL
    }
}
