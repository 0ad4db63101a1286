// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal styling for the findly CLI.
//!
//! OneDark for dark terminals, One Light for light ones. The theme comes from
//! `FINDLY_THEME` when set, then `COLORFGBG`, then defaults to dark. Colors
//! are dropped entirely when stdout is not a TTY or `NO_COLOR` is set, so
//! piping a result table into a file yields plain text.

use std::sync::OnceLock;

use findly::ScoringMethod;

/// Width between the `│` borders.
pub const BOX_WIDTH: usize = 78;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("FINDLY_THEME") {
        if let Some(theme) = parse_theme(&theme) {
            return theme;
        }
    }

    // "fg;bg", background 7 or above (except 8) is a light terminal
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

fn parse_theme(value: &str) -> Option<Theme> {
    match value.to_lowercase().as_str() {
        "light" | "l" => Some(Theme::Light),
        "dark" | "d" => Some(Theme::Dark),
        _ => None,
    }
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

mod onedark {
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const MAGENTA: (u8, u8, u8) = (198, 120, 221); // #c678dd
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
    pub const BRIGHT_GREEN: (u8, u8, u8) = (166, 226, 46);
    pub const BRIGHT_CYAN: (u8, u8, u8) = (102, 217, 239);
}

mod onelight {
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const MAGENTA: (u8, u8, u8) = (166, 38, 164); // #a626a4
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
    pub const BRIGHT_GREEN: (u8, u8, u8) = (68, 140, 39);
    pub const BRIGHT_CYAN: (u8, u8, u8) = (1, 112, 158);
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

theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(MAGENTA);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(BRIGHT_GREEN);
theme_color!(BRIGHT_CYAN);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers, or nothing when colors are off.
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Visible length, skipping ANSI escape sequences.
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

fn border(color_fn: fn() -> String) -> String {
    if use_colors() {
        color_fn()
    } else {
        String::new()
    }
}

fn reset() -> &'static str {
    if use_colors() {
        RESET
    } else {
        ""
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// `│ content          │`
pub fn row(content: &str) {
    let b = border(GRAY);
    let pad = BOX_WIDTH.saturating_sub(visible_len(content) + 1);
    println!("{b}│{r} {content}{}{b}│{r}", " ".repeat(pad), r = reset());
}

/// `┌─ LABEL ──────────┐`
pub fn section_top(label: &str) {
    section_line('┌', '┐', label);
}

/// `├─ LABEL ──────────┤`
pub fn section_mid(label: &str) {
    section_line('├', '┤', label);
}

fn section_line(left: char, right: char, label: &str) {
    let b = border(GRAY);
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{b}{left}{r}{label_part}{b}{}{right}{r}",
        "─".repeat(remaining),
        r = reset()
    );
}

/// `└──────────────────┘`
pub fn section_bot() {
    let b = border(GRAY);
    println!("{b}└{}┘{}", "─".repeat(BOX_WIDTH), reset());
}

/// `╔══════════════════╗` / centered title / `╚══════════════════╝`
pub fn banner(text: &str) {
    let b = border(BLUE);
    let r = reset();
    let colored = themed(BRIGHT_CYAN, &[BOLD], text);
    let total_pad = BOX_WIDTH.saturating_sub(visible_len(&colored));
    let left_pad = total_pad / 2;
    println!("{b}╔{}╗{r}", "═".repeat(BOX_WIDTH));
    println!(
        "{b}║{r}{}{colored}{}{b}║{r}",
        " ".repeat(left_pad),
        " ".repeat(total_pad - left_pad)
    );
    println!("{b}╚{}╝{r}", "═".repeat(BOX_WIDTH));
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Right-pad a styled string to a fixed visible width.
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

/// Cut to `max_chars` characters, ending in `…` when shortened.
pub fn truncate_chars(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let kept: String = s.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{kept}…")
}

/// Score in [0, 1], colored by strength (green=strong, gray=weak).
pub fn score_value(score: f64) -> String {
    let text = format!("{:>6.3}", score);
    if !use_colors() {
        return text;
    }
    let color = if score >= 0.5 {
        BRIGHT_GREEN()
    } else if score >= 0.2 {
        GREEN()
    } else if score >= 0.05 {
        YELLOW()
    } else {
        GRAY()
    };
    format!("{}{}{}", color, text, RESET)
}

/// `label: value`, or `label: -` in gray when absent.
pub fn field(label: &str, value: Option<&str>) -> String {
    let label = themed(GRAY, &[], &format!("{label}:"));
    match value {
        Some(v) => format!("{label} {v}"),
        None => format!("{label} {}", themed(GRAY, &[DIM], "-")),
    }
}

/// Badge for the scoring method that produced a result set.
pub fn method_badge(method: Option<ScoringMethod>) -> String {
    match method {
        Some(ScoringMethod::Lexical) => themed(GREEN, &[], "[lexical]"),
        Some(ScoringMethod::Substring) => themed(MAGENTA, &[], "[substring]"),
        None => themed(GRAY, &[], "[not scored]"),
    }
}
