//! Enums shared by the backend client and the CLI.
//!
//! All enums serialize lowercase and round-trip through [`std::str::FromStr`]
//! so the CLI can parse them without depending on serde.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// ImageFormat
// ---------------------------------------------------------------------------

/// Output format requested from the image CDN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Webp,
    Avif,
    Png,
    Jpeg,
}

impl ImageFormat {
    /// Return the string representation used in CDN query parameters.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Webp => "webp",
            Self::Avif => "avif",
            Self::Png => "png",
            Self::Jpeg => "jpeg",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageFormat {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "webp" => Ok(Self::Webp),
            "avif" => Ok(Self::Avif),
            "png" => Ok(Self::Png),
            "jpeg" | "jpg" => Ok(Self::Jpeg),
            other => Err(CoreError::UnknownVariant {
                kind: "image format",
                value: other.to_string(),
                expected: "webp, avif, png, jpeg",
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// HeroStyle
// ---------------------------------------------------------------------------

/// Brand art styles that may appear in hero slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum HeroStyle {
    NeuralFlower,
    Flowstate,
    Evolvingforms,
}

impl HeroStyle {
    /// All hero styles, in the order hero slots are filled.
    pub const ALL: [Self; 3] = [Self::NeuralFlower, Self::Flowstate, Self::Evolvingforms];

    /// Return the `style` column value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NeuralFlower => "neural_flower",
            Self::Flowstate => "flowstate",
            Self::Evolvingforms => "evolvingforms",
        }
    }

    /// Match a raw `style` column value against the hero styles.
    #[must_use]
    pub fn from_style(style: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == style)
    }
}

impl fmt::Display for HeroStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_format_parses_aliases() {
        assert_eq!("WEBP".parse::<ImageFormat>().unwrap(), ImageFormat::Webp);
        assert_eq!("jpg".parse::<ImageFormat>().unwrap(), ImageFormat::Jpeg);
        let err = "gif".parse::<ImageFormat>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown image format 'gif' (expected webp, avif, png, jpeg)"
        );
    }

    #[test]
    fn image_format_serializes_lowercase() {
        let json = serde_json::to_string(&ImageFormat::Avif).unwrap();
        assert_eq!(json, "\"avif\"");
    }

    #[test]
    fn hero_style_matches_exact_column_values() {
        assert_eq!(HeroStyle::from_style("flowstate"), Some(HeroStyle::Flowstate));
        assert_eq!(HeroStyle::from_style("Flowstate"), None);
        assert_eq!(HeroStyle::from_style("mindblock"), None);
    }
}
