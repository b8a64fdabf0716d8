//! Colored source listings.
//!
//! Hues map onto twelve bands: gray for lines no case ran, five reds, a
//! yellow and five greens, split at elevenths. Each source line is printed
//! whole in its band's color.

use std::fmt::Write as _;

use super::suspicion::NEVER_RUN;

/// Resets terminal color after each line.
pub const RESET: &str = "\x1b[0m";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Band {
    Gray,
    Red1,
    Red2,
    Red3,
    Red4,
    Red5,
    Yellow,
    Green5,
    Green4,
    Green3,
    Green2,
    Green1,
}

impl Band {
    /// Executed bands from most to least suspicious.
    const BY_HUE: [Band; 11] = [
        Band::Red1,
        Band::Red2,
        Band::Red3,
        Band::Red4,
        Band::Red5,
        Band::Yellow,
        Band::Green5,
        Band::Green4,
        Band::Green3,
        Band::Green2,
        Band::Green1,
    ];

    #[must_use]
    pub fn of(hue: f64) -> Self {
        if hue < 0.0 {
            return Band::Gray;
        }
        Self::BY_HUE
            .iter()
            .enumerate()
            .find(|&(k, _)| hue <= (k + 1) as f64 / 11.0)
            .map_or(Band::Green1, |(_, &band)| band)
    }

    /// Terminal escape that starts the band.
    #[must_use]
    pub const fn ansi(self) -> &'static str {
        match self {
            Band::Red1 => "\x1b[38;5;196;48;5;16m",
            Band::Red2 => "\x1b[38;5;202;48;5;16m",
            Band::Red3 => "\x1b[38;5;208;48;5;16m",
            Band::Red4 => "\x1b[38;5;214;48;5;16m",
            Band::Red5 => "\x1b[38;5;220;48;5;16m",
            Band::Yellow => "\x1b[33;5;226;48;5;16m",
            Band::Green5 => "\x1b[38;5;190;48;5;16m",
            Band::Green4 => "\x1b[38;5;154;48;5;16m",
            Band::Green3 => "\x1b[38;5;118;48;5;16m",
            Band::Green2 => "\x1b[38;5;82;48;5;16m",
            Band::Green1 => "\x1b[38;5;46;48;5;16m",
            Band::Gray => "\x1b[38;5;243;48;5;16m",
        }
    }

    /// The same xterm palette entry as a CSS color.
    #[must_use]
    pub const fn css(self) -> &'static str {
        match self {
            Band::Red1 => "#ff0000",
            Band::Red2 => "#ff5f00",
            Band::Red3 => "#ff8700",
            Band::Red4 => "#ffaf00",
            Band::Red5 => "#ffd700",
            Band::Yellow => "#ffff00",
            Band::Green5 => "#d7ff00",
            Band::Green4 => "#afff00",
            Band::Green3 => "#87ff00",
            Band::Green2 => "#5fff00",
            Band::Green1 => "#00ff00",
            Band::Gray => "#767676",
        }
    }
}

fn hue_at(hues: &[f64], line: usize) -> f64 {
    hues.get(line).copied().unwrap_or(NEVER_RUN)
}

/// Color every line of `source`. Lines past the end of `hues` are gray.
#[must_use]
pub fn render_ansi(source: &str, hues: &[f64]) -> String {
    let mut out = String::with_capacity(source.len() * 2);
    for (line, text) in source.split_inclusive('\n').enumerate() {
        let band = Band::of(hue_at(hues, line));
        out.push_str(band.ansi());
        out.push_str(text);
        out.push_str(RESET);
    }
    out
}

/// A standalone HTML page with the same coloring as [`render_ansi`].
#[must_use]
pub fn render_html(source: &str, hues: &[f64]) -> String {
    let mut out = String::from(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>tarantula</title></head>\n\
         <body style=\"background:#000000\">\n<pre>\n",
    );
    for (line, text) in source.lines().enumerate() {
        let band = Band::of(hue_at(hues, line));
        let _ = writeln!(
            out,
            "<span style=\"color:{}\">{}</span>",
            band.css(),
            escape_html(text)
        );
    }
    out.push_str("</pre>\n</body>\n</html>\n");
    out
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
