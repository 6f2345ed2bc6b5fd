// Copyright 2025-present the trailhead authors
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the trailhead CLI.
//!
//! Pretty output that respects your color scheme: OneDark for dark
//! terminals, One Light for light ones. Detection tries
//! `TRAILHEAD_THEME` first (for explicit control), then `COLORFGBG`
//! (set by some terminals), then macOS system appearance, then
//! defaults to dark. Respects `NO_COLOR` and non-TTY pipelines.

use std::sync::OnceLock;

use trailhead::types::DocumentType;

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// Cached theme detection result
static THEME: OnceLock<Theme> = OnceLock::new();

/// Detect terminal theme from environment
fn detect_theme() -> Theme {
    // 1. Explicit override via TRAILHEAD_THEME
    if let Ok(theme) = std::env::var("TRAILHEAD_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // 2. COLORFGBG (format: "fg;bg" where bg > 6 typically means light)
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    // 3. macOS: check system appearance
    #[cfg(target_os = "macos")]
    {
        if let Ok(output) = std::process::Command::new("defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output()
        {
            let stdout = String::from_utf8_lossy(&output.stdout);
            if !stdout.contains("Dark") && output.status.success() {
                return Theme::Light;
            }
        }
    }

    // 4. Default to dark (most developer terminals)
    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

/// True color escape sequence helper
fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
}

pub use colors::*;

/// OneDark palette
mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const MAGENTA: (u8, u8, u8) = (198, 120, 221); // #c678dd
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
    pub const BRIGHT_GREEN: (u8, u8, u8) = (166, 226, 46);
    pub const BRIGHT_BLUE: (u8, u8, u8) = (127, 200, 255);
}

/// One Light palette
mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const MAGENTA: (u8, u8, u8) = (166, 38, 164); // #a626a4
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
    pub const BRIGHT_GREEN: (u8, u8, u8) = (68, 140, 39);
    pub const BRIGHT_BLUE: (u8, u8, u8) = (54, 100, 212);
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(MAGENTA);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(BRIGHT_GREEN);
theme_color!(BRIGHT_BLUE);

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    // Respect NO_COLOR standard
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Color-coded document type badge
pub fn type_badge(kind: DocumentType) -> String {
    if !use_colors() {
        return format!("[{}]", kind);
    }
    let color = match kind {
        DocumentType::Activity => GREEN(),
        DocumentType::Accommodation => BLUE(),
        DocumentType::Dining => YELLOW(),
        DocumentType::Event => MAGENTA(),
        DocumentType::Editorial => CYAN(),
        DocumentType::Attraction => BRIGHT_GREEN(),
        DocumentType::Venue => BRIGHT_BLUE(),
    };
    format!("{}[{}]{}", color, kind, RESET)
}

/// Color-coded timing value (green=fast, yellow=medium, red=slow)
pub fn timing_ms(value: f64) -> String {
    if !use_colors() {
        return format!("{:.1}ms", value);
    }
    let color = if value < 5.0 {
        GREEN()
    } else if value < 20.0 {
        YELLOW()
    } else {
        RED()
    };
    format!("{}{:.1}ms{}", color, value, RESET)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_format() {
        let code = rgb(255, 128, 64);
        assert_eq!(code, "\x1b[38;2;255;128;64m");
    }

    #[test]
    fn test_theme_colors_are_different() {
        // OneDark and One Light should have different RGB values
        assert_ne!(onedark::RED, onelight::RED);
        assert_ne!(onedark::GREEN, onelight::GREEN);
        assert_ne!(onedark::BLUE, onelight::BLUE);
    }
}
