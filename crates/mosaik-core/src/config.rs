//! Deck-wide spacing and title configuration.
//!
//! All lengths are in physical units (inches for the bundled canvases).
//! The configuration is an immutable value passed explicitly to every layout
//! and render call.

use crate::errors::ConfigError;
use crate::types::Margins;

/// Spacing constants shared by every slide of a deck.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DeckConfig {
    pub slide_title_font_size: f64,
    pub slide_title_font_name: String,
    pub slide_title_top_margin: f64,
    pub slide_title_bottom_margin: f64,
    pub slide_title_left_margin: f64,
    pub slide_title_right_margin: f64,
    pub slide_left_padding: f64,
    pub slide_right_padding: f64,
    pub slide_top_padding: f64,
    pub slide_bottom_padding: f64,
    /// Margin given to every side of a region when a slide is parsed
    pub region_margin: f64,
    /// Row height used by tables in `auto` size mode
    pub table_row_height: f64,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            slide_title_font_size: 0.3,
            slide_title_font_name: "Arial".to_string(),
            slide_title_top_margin: 0.1,
            slide_title_bottom_margin: 0.2,
            slide_title_left_margin: 0.1,
            slide_title_right_margin: 0.1,
            slide_left_padding: 0.1,
            slide_right_padding: 0.1,
            slide_top_padding: 0.1,
            slide_bottom_padding: 0.1,
            region_margin: 0.1,
            table_row_height: 0.4,
        }
    }
}

impl DeckConfig {
    /// A configuration with every spacing set to zero.
    pub fn zero_spacing() -> Self {
        Self {
            slide_title_top_margin: 0.0,
            slide_title_bottom_margin: 0.0,
            slide_title_left_margin: 0.0,
            slide_title_right_margin: 0.0,
            slide_left_padding: 0.0,
            slide_right_padding: 0.0,
            slide_top_padding: 0.0,
            slide_bottom_padding: 0.0,
            region_margin: 0.0,
            ..Self::default()
        }
    }

    /// Vertical space taken by a slide title.
    pub fn title_block_height(&self) -> f64 {
        self.slide_title_font_size + self.slide_title_top_margin + self.slide_title_bottom_margin
    }

    /// Slide-level padding as margins.
    pub fn padding(&self) -> Margins {
        Margins {
            left: self.slide_left_padding,
            top: self.slide_top_padding,
            right: self.slide_right_padding,
            bottom: self.slide_bottom_padding,
        }
    }

    /// Check that every length is finite and non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let lengths = [
            ("slide_title_font_size", self.slide_title_font_size),
            ("slide_title_top_margin", self.slide_title_top_margin),
            ("slide_title_bottom_margin", self.slide_title_bottom_margin),
            ("slide_title_left_margin", self.slide_title_left_margin),
            ("slide_title_right_margin", self.slide_title_right_margin),
            ("slide_left_padding", self.slide_left_padding),
            ("slide_right_padding", self.slide_right_padding),
            ("slide_top_padding", self.slide_top_padding),
            ("slide_bottom_padding", self.slide_bottom_padding),
            ("region_margin", self.region_margin),
            ("table_row_height", self.table_row_height),
        ];
        for (name, value) in lengths {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid {
                    reason: format!("{name} must be a non-negative length, got {value}"),
                });
            }
        }
        Ok(())
    }

    /// Parse a configuration from JSON. Missing fields keep their defaults.
    #[cfg(feature = "serde")]
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        let config: DeckConfig = serde_json::from_str(source)
            .map_err(|e| ConfigError::Invalid { reason: e.to_string() })?;
        config.validate()?;
        Ok(config)
    }
}
