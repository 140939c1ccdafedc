// SPDX-License-Identifier: PMPL-1.0-or-later
//! Contrast evaluator - WCAG 1.4.3 Contrast (Minimum), 1.4.6 Contrast (Enhanced)
//!
//! Turns a pair of CSS colour tokens into a WCAG contrast ratio and
//! classifies it against the normal-text thresholds:
//! - AA: 4.5:1
//! - AAA: 7:1

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Minimum ratio for WCAG AA normal text
pub const AA_THRESHOLD: f64 = 4.5;

/// Minimum ratio for WCAG AAA normal text
pub const AAA_THRESHOLD: f64 = 7.0;

static RGB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^rgba?\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})").expect("valid regex")
});

/// An sRGB colour with 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Relative luminance per WCAG 2.x
    /// <https://www.w3.org/TR/WCAG21/#dfn-relative-luminance>
    pub fn relative_luminance(self) -> f64 {
        let linear = [self.r, self.g, self.b].map(|c| {
            let v = f64::from(c) / 255.0;
            if v <= 0.04045 {
                v / 12.92
            } else {
                ((v + 0.055) / 1.055).powf(2.4)
            }
        });
        0.2126 * linear[0] + 0.7152 * linear[1] + 0.0722 * linear[2]
    }
}

/// Highest WCAG threshold a contrast ratio meets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContrastLevel {
    Fail,
    Aa,
    Aaa,
}

impl std::fmt::Display for ContrastLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContrastLevel::Fail => write!(f, "fail"),
            ContrastLevel::Aa => write!(f, "aa"),
            ContrastLevel::Aaa => write!(f, "aaa"),
        }
    }
}

/// Outcome of evaluating one foreground/background pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContrastResult {
    /// Foreground token as written in the stylesheet
    pub foreground: String,
    /// Background token as written in the stylesheet
    pub background: String,
    pub ratio: f64,
    #[serde(rename = "wcagAA")]
    pub wcag_aa: bool,
    #[serde(rename = "wcagAAA")]
    pub wcag_aaa: bool,
    pub level: ContrastLevel,
}

impl ContrastResult {
    /// Classify an already computed ratio
    pub fn from_ratio(foreground: &str, background: &str, ratio: f64) -> Self {
        let wcag_aa = ratio >= AA_THRESHOLD;
        let wcag_aaa = ratio >= AAA_THRESHOLD;
        let level = if wcag_aaa {
            ContrastLevel::Aaa
        } else if wcag_aa {
            ContrastLevel::Aa
        } else {
            ContrastLevel::Fail
        };

        Self {
            foreground: foreground.to_string(),
            background: background.to_string(),
            ratio,
            wcag_aa,
            wcag_aaa,
            level,
        }
    }
}

/// Evaluate two raw colour tokens.
///
/// Returns `None` when either token is not a colour this evaluator
/// understands; callers treat that as a silent pass.
pub fn evaluate_contrast(foreground: &str, background: &str) -> Option<ContrastResult> {
    let fg = parse_color(foreground)?;
    let bg = parse_color(background)?;
    Some(ContrastResult::from_ratio(
        foreground.trim(),
        background.trim(),
        contrast_ratio(fg, bg),
    ))
}

/// WCAG contrast ratio, always >= 1.0
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = a.relative_luminance();
    let lb = b.relative_luminance();
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Parse a CSS colour token: `#rgb`, `#rrggbb`, `rgb()`/`rgba()` or a named colour
pub fn parse_color(token: &str) -> Option<Rgb> {
    let value = token.trim().to_ascii_lowercase();
    let value = value.trim_end_matches("!important").trim_end();

    if let Some(hex) = value.strip_prefix('#') {
        parse_hex(hex)
    } else if value.starts_with("rgb") {
        parse_rgb(value)
    } else {
        named_color(value)
    }
}

fn parse_hex(hex: &str) -> Option<Rgb> {
    if !hex.is_ascii() {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 => {
            let r = channel(&hex[0..1].repeat(2))?;
            let g = channel(&hex[1..2].repeat(2))?;
            let b = channel(&hex[2..3].repeat(2))?;
            Some(Rgb::new(r, g, b))
        }
        6 => Some(Rgb::new(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        _ => None,
    }
}

fn parse_rgb(value: &str) -> Option<Rgb> {
    let caps = RGB_RE.captures(value)?;
    Some(Rgb::new(
        caps[1].parse().ok()?,
        caps[2].parse().ok()?,
        caps[3].parse().ok()?,
    ))
}

fn named_color(name: &str) -> Option<Rgb> {
    let rgb = match name {
        "white" => Rgb::new(255, 255, 255),
        "black" => Rgb::new(0, 0, 0),
        "red" => Rgb::new(255, 0, 0),
        "green" => Rgb::new(0, 128, 0),
        "blue" => Rgb::new(0, 0, 255),
        "yellow" => Rgb::new(255, 255, 0),
        "gray" | "grey" => Rgb::new(128, 128, 128),
        "darkgray" | "darkgrey" => Rgb::new(169, 169, 169),
        "lightgray" | "lightgrey" => Rgb::new(211, 211, 211),
        "silver" => Rgb::new(192, 192, 192),
        "maroon" => Rgb::new(128, 0, 0),
        "olive" => Rgb::new(128, 128, 0),
        "lime" => Rgb::new(0, 255, 0),
        "aqua" | "cyan" => Rgb::new(0, 255, 255),
        "teal" => Rgb::new(0, 128, 128),
        "navy" => Rgb::new(0, 0, 128),
        "fuchsia" | "magenta" => Rgb::new(255, 0, 255),
        "purple" => Rgb::new(128, 0, 128),
        "orange" => Rgb::new(255, 165, 0),
        _ => return None,
    };
    Some(rgb)
}
