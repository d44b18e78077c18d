//! Theme support for quickstage.
//!
//! A [`Theme`] is plain configuration handed to the renderer; nothing in the
//! crate reads colours from global state.

use ratatui::style::Color;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;

/// A complete theme definition.
///
/// Field names are self-documenting (e.g., `text_muted` = muted text color).
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct Theme {
    pub bg: Color,

    // Text
    pub text_normal: Color,
    pub text_muted: Color,

    // Cursor marker and key hints
    pub accent: Color,

    // Checkbox glyphs
    pub staged: Color,
    pub partial: Color,
    pub unstaged: Color,

    // Error line
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::builtin_default()
    }
}

/// JSON theme file format.
#[derive(Debug, Deserialize)]
#[allow(missing_docs)]
pub struct ThemeJson {
    #[serde(default)]
    pub defs: HashMap<String, String>,
    pub theme: ThemeColorsJson,
}

/// Theme color definitions from JSON.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct ThemeColorsJson {
    pub bg: Option<String>,
    pub text_normal: Option<String>,
    pub text_muted: Option<String>,
    pub accent: Option<String>,
    pub staged: Option<String>,
    pub partial: Option<String>,
    pub unstaged: Option<String>,
    pub error: Option<String>,
}

impl Theme {
    /// Load a theme by name. Checks user themes first, then builtin.
    pub fn load(name: &str) -> Self {
        if let Some(theme) = load_user_theme(name) {
            return theme;
        }

        match name {
            "dracula" => Self::dracula(),
            "nord" => Self::nord(),
            "gruvbox" => Self::gruvbox(),
            "solarized" => Self::solarized(),
            "default" => Self::builtin_default(),
            other => {
                tracing::warn!(theme = other, "unknown theme, using default");
                Self::builtin_default()
            }
        }
    }

    /// List available theme names.
    pub fn list() -> Vec<String> {
        let mut themes: Vec<String> = ["default", "dracula", "gruvbox", "nord", "solarized"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        if let Some(dir) = user_themes_dir() {
            if let Ok(entries) = std::fs::read_dir(dir) {
                for entry in entries.flatten() {
                    let path = entry.path();
                    if path.extension().is_some_and(|e| e == "json") {
                        if let Some(stem) = path.file_stem() {
                            let name = stem.to_string_lossy().to_string();
                            if !themes.contains(&name) {
                                themes.push(name);
                            }
                        }
                    }
                }
            }
        }

        themes.sort();
        themes
    }

    /// Terminal palette colours, matching a plain 256-colour setup.
    pub fn builtin_default() -> Self {
        Self {
            bg: Color::Reset,
            text_normal: Color::Reset,
            text_muted: Color::Indexed(240),
            accent: Color::Indexed(12),
            staged: Color::Indexed(42),
            partial: Color::Indexed(240),
            unstaged: Color::Indexed(240),
            error: Color::Indexed(203),
        }
    }

    /// Dracula theme.
    pub fn dracula() -> Self {
        Self {
            bg: Color::Rgb(40, 42, 54),
            text_normal: Color::Rgb(248, 248, 242),
            text_muted: Color::Rgb(98, 114, 164),
            accent: Color::Rgb(189, 147, 249),
            staged: Color::Rgb(80, 250, 123),
            partial: Color::Rgb(241, 250, 140),
            unstaged: Color::Rgb(98, 114, 164),
            error: Color::Rgb(255, 85, 85),
        }
    }

    /// Nord theme.
    pub fn nord() -> Self {
        Self {
            bg: Color::Rgb(46, 52, 64),
            text_normal: Color::Rgb(216, 222, 233),
            text_muted: Color::Rgb(97, 110, 136),
            accent: Color::Rgb(136, 192, 208),
            staged: Color::Rgb(163, 190, 140),
            partial: Color::Rgb(235, 203, 139),
            unstaged: Color::Rgb(97, 110, 136),
            error: Color::Rgb(191, 97, 106),
        }
    }

    /// Gruvbox dark theme.
    pub fn gruvbox() -> Self {
        Self {
            bg: Color::Rgb(40, 40, 40),
            text_normal: Color::Rgb(235, 219, 178),
            text_muted: Color::Rgb(146, 131, 116),
            accent: Color::Rgb(131, 165, 152),
            staged: Color::Rgb(184, 187, 38),
            partial: Color::Rgb(250, 189, 47),
            unstaged: Color::Rgb(146, 131, 116),
            error: Color::Rgb(251, 73, 52),
        }
    }

    /// Solarized dark theme.
    pub fn solarized() -> Self {
        Self {
            bg: Color::Rgb(0, 43, 54),
            text_normal: Color::Rgb(147, 161, 161),
            text_muted: Color::Rgb(88, 110, 117),
            accent: Color::Rgb(38, 139, 210),
            staged: Color::Rgb(133, 153, 0),
            partial: Color::Rgb(181, 137, 0),
            unstaged: Color::Rgb(88, 110, 117),
            error: Color::Rgb(220, 50, 47),
        }
    }
}

/// Get user themes directory (~/.config/quickstage/themes/).
fn user_themes_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("quickstage").join("themes"))
}

/// Load a theme from user themes directory.
fn load_user_theme(name: &str) -> Option<Theme> {
    let path = user_themes_dir()?.join(format!("{}.json", name));
    if !path.exists() {
        return None;
    }

    let content = std::fs::read_to_string(&path).ok()?;
    match serde_json::from_str::<ThemeJson>(&content) {
        Ok(json) => Some(resolve_theme(&json)),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "invalid theme file");
            None
        }
    }
}

/// Parse a hex color string to Color.
fn parse_hex(s: &str) -> Option<Color> {
    let s = s.trim_start_matches('#');
    if s.len() != 6 {
        return None;
    }

    let r = u8::from_str_radix(&s[0..2], 16).ok()?;
    let g = u8::from_str_radix(&s[2..4], 16).ok()?;
    let b = u8::from_str_radix(&s[4..6], 16).ok()?;

    Some(Color::Rgb(r, g, b))
}

/// Resolve a color value (hex or reference).
fn resolve_color(value: &str, defs: &HashMap<String, String>, fallback: Color) -> Color {
    if value.starts_with('#') {
        parse_hex(value).unwrap_or(fallback)
    } else if let Some(def) = defs.get(value) {
        parse_hex(def).unwrap_or(fallback)
    } else {
        fallback
    }
}

/// Resolve a theme JSON to a Theme struct, filling gaps from the default.
pub fn resolve_theme(json: &ThemeJson) -> Theme {
    let default = Theme::builtin_default();
    let defs = &json.defs;
    let t = &json.theme;
    let pick = |value: &Option<String>, fallback: Color| {
        value
            .as_deref()
            .map_or(fallback, |v| resolve_color(v, defs, fallback))
    };

    Theme {
        bg: pick(&t.bg, default.bg),
        text_normal: pick(&t.text_normal, default.text_normal),
        text_muted: pick(&t.text_muted, default.text_muted),
        accent: pick(&t.accent, default.accent),
        staged: pick(&t.staged, default.staged),
        partial: pick(&t.partial, default.partial),
        unstaged: pick(&t.unstaged, default.unstaged),
        error: pick(&t.error, default.error),
    }
}
