//! Theme configuration: named color slots, font pair, light/dark mode.
//!
//! A theme is always fully populated - partial updates are merged onto the
//! existing theme per-slot, never replacing it wholesale, so no slot is
//! ever dropped.

use serde::{Deserialize, Serialize};

/// Fixed set of named color slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeColors {
    pub primary: String,
    pub secondary: String,
    pub background: String,
    pub text: String,
    pub accent: String,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            primary: "#2563eb".to_string(),
            secondary: "#7c3aed".to_string(),
            background: "#ffffff".to_string(),
            text: "#111827".to_string(),
            accent: "#f59e0b".to_string(),
        }
    }
}

/// Font-family pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeFonts {
    pub heading: String,
    pub body: String,
}

impl Default for ThemeFonts {
    fn default() -> Self {
        Self {
            heading: "Inter".to_string(),
            body: "Inter".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl Default for ThemeMode {
    fn default() -> Self {
        ThemeMode::Light
    }
}

/// Full theme for one page. Always fully populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ThemeConfig {
    pub colors: ThemeColors,
    pub fonts: ThemeFonts,
    pub mode: ThemeMode,
}

/// Partial color update: only the slots present are changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPatch {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub background: Option<String>,
    pub text: Option<String>,
    pub accent: Option<String>,
}

/// Partial font update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontPatch {
    pub heading: Option<String>,
    pub body: Option<String>,
}

/// Partial theme update. Colors and fonts merge per-slot; mode replaces
/// wholesale when present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemePatch {
    pub colors: Option<ColorPatch>,
    pub fonts: Option<FontPatch>,
    pub mode: Option<ThemeMode>,
}

impl ThemeConfig {
    /// Merge a partial update. Slots not mentioned by the patch keep their
    /// current value.
    pub fn apply_patch(&mut self, patch: &ThemePatch) {
        if let Some(colors) = &patch.colors {
            merge_slot(&mut self.colors.primary, &colors.primary);
            merge_slot(&mut self.colors.secondary, &colors.secondary);
            merge_slot(&mut self.colors.background, &colors.background);
            merge_slot(&mut self.colors.text, &colors.text);
            merge_slot(&mut self.colors.accent, &colors.accent);
        }

        if let Some(fonts) = &patch.fonts {
            merge_slot(&mut self.fonts.heading, &fonts.heading);
            merge_slot(&mut self.fonts.body, &fonts.body);
        }

        if let Some(mode) = patch.mode {
            self.mode = mode;
        }
    }
}

fn merge_slot(slot: &mut String, update: &Option<String>) {
    if let Some(value) = update {
        *slot = value.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_is_fully_populated() {
        let theme = ThemeConfig::default();

        assert!(!theme.colors.primary.is_empty());
        assert!(!theme.colors.secondary.is_empty());
        assert!(!theme.colors.background.is_empty());
        assert!(!theme.colors.text.is_empty());
        assert!(!theme.colors.accent.is_empty());
        assert!(!theme.fonts.heading.is_empty());
        assert!(!theme.fonts.body.is_empty());
        assert_eq!(theme.mode, ThemeMode::Light);
    }

    #[test]
    fn test_patch_never_drops_slots() {
        let mut theme = ThemeConfig::default();
        let before = theme.clone();

        theme.apply_patch(&ThemePatch {
            colors: Some(ColorPatch {
                primary: Some("#000000".to_string()),
                ..ColorPatch::default()
            }),
            ..ThemePatch::default()
        });

        assert_eq!(theme.colors.primary, "#000000");
        assert_eq!(theme.colors.secondary, before.colors.secondary);
        assert_eq!(theme.colors.background, before.colors.background);
        assert_eq!(theme.colors.text, before.colors.text);
        assert_eq!(theme.colors.accent, before.colors.accent);
        assert_eq!(theme.fonts, before.fonts);
    }

    #[test]
    fn test_mode_replaces_wholesale() {
        let mut theme = ThemeConfig::default();

        theme.apply_patch(&ThemePatch {
            mode: Some(ThemeMode::Dark),
            ..ThemePatch::default()
        });

        assert_eq!(theme.mode, ThemeMode::Dark);
        assert_eq!(theme.colors, ThemeColors::default());
    }

    #[test]
    fn test_fonts_merge_independently_of_colors() {
        let mut theme = ThemeConfig::default();

        theme.apply_patch(&ThemePatch {
            fonts: Some(FontPatch {
                heading: Some("Playfair Display".to_string()),
                body: None,
            }),
            ..ThemePatch::default()
        });

        assert_eq!(theme.fonts.heading, "Playfair Display");
        assert_eq!(theme.fonts.body, ThemeFonts::default().body);
        assert_eq!(theme.colors, ThemeColors::default());
    }

    #[test]
    fn test_mode_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ThemeMode::Dark).unwrap(),
            "\"dark\""
        );
    }
}
