//! Font discovery via fontconfig

use anyhow::{Context, Result, anyhow};
use fontconfig::{Fontconfig, Pattern};
use std::collections::BTreeSet;
use std::ffi::CString;
use std::path::PathBuf;
use tracing::{debug, info};

/// Style suffixes recognised at the end of a font name, longest first so
/// "Bold Italic" wins over "Italic"
const STYLE_SUFFIXES: &[&str] = &[
    "Condensed Bold Italic",
    "Condensed Bold",
    "ExtraBold Italic",
    "SemiBold Italic",
    "Black Italic",
    "Medium Italic",
    "Bold Oblique",
    "Bold Italic",
    "Condensed",
    "ExtraBold",
    "SemiBold",
    "Regular",
    "Oblique",
    "Italic",
    "Medium",
    "Black",
    "Light",
    "Bold",
    "Book",
];

/// A font name split into fontconfig family and style
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontQuery<'a> {
    pub family: &'a str,
    pub style: Option<&'a str>,
}

impl<'a> FontQuery<'a> {
    /// Split a full font name into family and optional style.
    ///
    /// Example: "DejaVu Serif Bold" -> family "DejaVu Serif", style "Bold"
    pub fn parse(font_name: &'a str) -> Self {
        let font_name = font_name.trim();
        for style in STYLE_SUFFIXES {
            let Some(prefix) = font_name.strip_suffix(style) else {
                continue;
            };
            // Suffix must be a separate word and leave a family behind
            if prefix.ends_with(' ') && !prefix.trim().is_empty() {
                return Self {
                    family: prefix.trim(),
                    style: Some(style),
                };
            }
        }
        Self {
            family: font_name,
            style: None,
        }
    }
}

/// Names of every installed font as "Family Style" ("Family" for Regular)
pub fn list_fonts() -> Result<Vec<String>> {
    let fc = Fontconfig::new().context("Failed to initialize fontconfig")?;
    let pattern = Pattern::new(&fc);
    let font_set = fontconfig::list_fonts(&pattern, None);

    let fonts: BTreeSet<String> = font_set
        .iter()
        .map(|font| {
            let family = font.get_string(fontconfig::FC_FAMILY).unwrap_or("Unknown");
            match font.get_string(fontconfig::FC_STYLE) {
                Some(style) if style != "Regular" => format!("{} {}", family, style),
                _ => family.to_string(),
            }
        })
        .collect();

    info!(count = fonts.len(), "Listed installed fonts via fontconfig");
    Ok(fonts.into_iter().collect())
}

/// Resolve a family name (optionally with style suffix) to a font file.
///
/// Fontconfig always returns its closest match, so a match from a different
/// family is treated as "not installed" rather than silently accepted.
pub fn find_font_path(font_name: &str) -> Result<PathBuf> {
    let fc = Fontconfig::new().context("Failed to initialize fontconfig")?;
    let query = FontQuery::parse(font_name);

    let mut pattern = Pattern::new(&fc);
    let family = CString::new(query.family)
        .with_context(|| format!("Invalid family name: {}", query.family))?;
    pattern.add_string(fontconfig::FC_FAMILY, &family);
    if let Some(style) = query.style {
        let style = CString::new(style).with_context(|| format!("Invalid style name: {}", style))?;
        pattern.add_string(fontconfig::FC_STYLE, &style);
    }

    let matched = pattern.font_match();
    if let Some(matched_family) = matched.get_string(fontconfig::FC_FAMILY)
        && !matched_family.eq_ignore_ascii_case(query.family)
    {
        return Err(anyhow!(
            "Font '{}' not installed (fontconfig offered '{}')",
            font_name,
            matched_family
        ));
    }

    let path = matched
        .filename()
        .map(PathBuf::from)
        .with_context(|| format!("No font file found for '{}'", font_name))?;
    if !path.exists() {
        return Err(anyhow!(
            "Font file '{}' reported by fontconfig does not exist",
            path.display()
        ));
    }

    debug!(
        font = font_name,
        family = query.family,
        style = ?query.style,
        path = %path.display(),
        "Resolved font via fontconfig"
    );
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_font_query() {
        assert_eq!(
            FontQuery::parse("Georgia"),
            FontQuery {
                family: "Georgia",
                style: None
            }
        );
        assert_eq!(
            FontQuery::parse("DejaVu Serif Bold"),
            FontQuery {
                family: "DejaVu Serif",
                style: Some("Bold")
            }
        );
        assert_eq!(
            FontQuery::parse("Noto Serif Bold Italic"),
            FontQuery {
                family: "Noto Serif",
                style: Some("Bold Italic")
            }
        );
        assert_eq!(
            FontQuery::parse("Liberation Serif Condensed Bold").style,
            Some("Condensed Bold")
        );
    }

    #[test]
    fn test_parse_requires_word_boundary() {
        // "Bold" alone is a family, and "Kobold" does not end in a separate "Bold"
        assert_eq!(FontQuery::parse("Bold").family, "Bold");
        assert_eq!(FontQuery::parse("Kobold").style, None);
    }

    #[test]
    fn test_find_common_fonts() {
        for family in ["DejaVu Serif", "Liberation Serif", "Noto Serif"] {
            if let Ok(path) = find_font_path(family) {
                println!("{} -> {}", family, path.display());
                assert!(path.is_absolute(), "Font path should be absolute");
            }
        }
    }

    #[test]
    fn test_missing_family_is_an_error() {
        assert!(find_font_path("Definitely Not An Installed Family 7f3a").is_err());
    }
}
