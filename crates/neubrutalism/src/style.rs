//! Styling primitives for the neubrutalism look.
//!
//! Flat backgrounds, thick borders, hard offset shadows. A [`StyleConfig`]
//! carries the five numbers and colors every decorator needs; a [`Theme`]
//! carries the accent and neutral tokens the stateful decorators switch
//! between.

use serde::Deserialize;

use crate::error::StyleError;

/// RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "String")]
pub struct Color {
    /// Red component (0-1).
    pub r: f32,
    /// Green component (0-1).
    pub g: f32,
    /// Blue component (0-1).
    pub b: f32,
    /// Alpha component (0-1).
    pub a: f32,
}

impl Color {
    /// Fully transparent.
    pub const CLEAR: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);
    /// Solid black, the neutral ink.
    pub const BLACK: Self = Self::rgba(0.0, 0.0, 0.0, 1.0);
    /// Solid white, the default surface.
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);
    /// Signal yellow, the classic neubrutalist button fill.
    pub const YELLOW: Self = Self::hex(0xFFCC_00FF);
    /// Secondary text gray.
    pub const GRAY: Self = Self::hex(0x8E8E_93FF);
    /// Default accent blue.
    pub const BLUE: Self = Self::hex(0x007A_FFFF);

    /// Creates a color from RGBA values (0-1).
    #[must_use]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from a hex value (0xRRGGBBAA).
    #[must_use]
    pub const fn hex(hex: u32) -> Self {
        let r = ((hex >> 24) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let b = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let a = (hex & 0xFF) as f32 / 255.0;
        Self::rgba(r, g, b, a)
    }

    /// Parses a color literal.
    ///
    /// Accepts `#RRGGBB`, `#RRGGBBAA` and the names `white`, `black`,
    /// `yellow`, `gray`, `blue` and `clear`.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::InvalidColor`] for anything else.
    pub fn parse(literal: &str) -> Result<Self, StyleError> {
        let trimmed = literal.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "white" => return Ok(Self::WHITE),
            "black" => return Ok(Self::BLACK),
            "yellow" => return Ok(Self::YELLOW),
            "gray" | "grey" => return Ok(Self::GRAY),
            "blue" => return Ok(Self::BLUE),
            "clear" | "transparent" => return Ok(Self::CLEAR),
            _ => {}
        }

        let invalid = || StyleError::InvalidColor(literal.to_owned());
        let digits = trimmed.strip_prefix('#').ok_or_else(invalid)?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let value = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
        match digits.len() {
            6 => Ok(Self::hex((value << 8) | 0xFF)),
            8 => Ok(Self::hex(value)),
            _ => Err(invalid()),
        }
    }

    /// Returns a new color with different alpha.
    #[must_use]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self::rgba(self.r, self.g, self.b, a)
    }

    /// Returns the color with its alpha multiplied by `opacity`.
    #[must_use]
    pub fn opacity(self, opacity: f32) -> Self {
        self.with_alpha(self.a * opacity.clamp(0.0, 1.0))
    }

    /// Converts to array format.
    #[must_use]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl TryFrom<String> for Color {
    type Error = StyleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

/// The five knobs of the neubrutalism look.
///
/// Construct with a struct literal over [`StyleConfig::default`] or with the
/// `with_*` builders:
///
/// ```
/// use neubrutalism::{Color, StyleConfig};
///
/// let style = StyleConfig::default()
///     .with_background(Color::YELLOW)
///     .with_corner_radius(12.0);
/// assert_eq!(style.border_width, 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleConfig {
    /// Fill behind the content.
    pub background: Color,
    /// Border stroke color; the shadow uses it at [`Self::SHADOW_OPACITY`].
    pub border_color: Color,
    /// Corner radius of the background, shadow and border.
    pub corner_radius: f32,
    /// Border stroke thickness.
    pub border_width: f32,
    /// Shadow offset along both axes.
    pub shadow_offset: f32,
}

impl StyleConfig {
    /// Opacity applied to the border color when painting the shadow.
    pub const SHADOW_OPACITY: f32 = 0.8;

    /// White surface, black 2pt border, square corners, 4pt shadow.
    pub const DEFAULT: Self = Self {
        background: Color::WHITE,
        border_color: Color::BLACK,
        corner_radius: 0.0,
        border_width: 2.0,
        shadow_offset: 4.0,
    };

    /// Sets the background color.
    #[must_use]
    pub const fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Sets the border color.
    #[must_use]
    pub const fn with_border_color(mut self, border_color: Color) -> Self {
        self.border_color = border_color;
        self
    }

    /// Sets the corner radius.
    #[must_use]
    pub const fn with_corner_radius(mut self, corner_radius: f32) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    /// Sets the border width.
    #[must_use]
    pub const fn with_border_width(mut self, border_width: f32) -> Self {
        self.border_width = border_width;
        self
    }

    /// Sets the shadow offset.
    #[must_use]
    pub const fn with_shadow_offset(mut self, shadow_offset: f32) -> Self {
        self.shadow_offset = shadow_offset;
        self
    }

    /// Color of the hard shadow.
    #[must_use]
    pub fn shadow_color(&self) -> Color {
        self.border_color.opacity(Self::SHADOW_OPACITY)
    }

    /// Returns a copy with every numeric field clamped to `>= 0`.
    ///
    /// NaN clamps to zero as well.
    #[must_use]
    pub fn sanitized(self) -> Self {
        let clamp = |value: f32| if value > 0.0 { value } else { 0.0 };
        let sanitized = Self {
            corner_radius: clamp(self.corner_radius),
            border_width: clamp(self.border_width),
            shadow_offset: clamp(self.shadow_offset),
            ..self
        };
        if sanitized != self {
            tracing::debug!(
                corner_radius = self.corner_radius,
                border_width = self.border_width,
                shadow_offset = self.shadow_offset,
                "clamped out-of-range style values to zero"
            );
        }
        sanitized
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Accent and neutral tokens.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Theme {
    /// Highlight color for the on/focused state.
    pub accent: Color,
    /// Ink for the off/unfocused state and for toggle labels.
    pub neutral: Color,
}

impl Theme {
    /// Blue accent over black ink.
    pub const DEFAULT: Self = Self {
        accent: Color::BLUE,
        neutral: Color::BLACK,
    };

    /// Creates a theme with the given accent and the black neutral.
    #[must_use]
    pub const fn with_accent(accent: Color) -> Self {
        Self {
            accent,
            neutral: Color::BLACK,
        }
    }

    /// Accent when `active`, neutral otherwise.
    #[must_use]
    pub const fn resolve(&self, active: bool) -> Color {
        if active {
            self.accent
        } else {
            self.neutral
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::DEFAULT
    }
}
