//! Icon rendering: fit the glyph to the padded canvas, center it, draw it

use anyhow::{Result, bail};
use tracing::debug;

use super::canvas::Canvas;
use crate::common::types::{InkBounds, Position};
use crate::config::DesignTokens;
use crate::constants::fit::{MAX_ITERATIONS, MIN_FONT_SIZE, OVERSHOOT_FACTOR, SHRINK_FACTOR};
use crate::font::FontProvider;

/// Result of the font-size search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FitOutcome {
    pub font_size: u32,
    /// Number of sizes measured inside the bounded loop
    pub iterations: u32,
    /// Ink bounds at `font_size`, relative to the pen origin
    pub bounds: InkBounds,
    /// Canvas position of the ink box's top-left corner
    pub placement: Position,
}

impl FitOutcome {
    /// Pen origin that puts the ink box at `placement`
    pub fn pen_origin(&self) -> Position {
        Position::new(
            self.placement.x - self.bounds.left,
            self.placement.y - self.bounds.top,
        )
    }
}

pub struct RenderedIcon {
    pub canvas: Canvas,
    pub fit: FitOutcome,
}

fn shrink(size: u32) -> u32 {
    ((size as f64 * SHRINK_FACTOR) as u32).max(MIN_FONT_SIZE)
}

/// Largest size (starting from a slight overshoot of `target`) whose ink box
/// fits inside a `target × target` square.
///
/// Gives up after `MAX_ITERATIONS` measurements and keeps the last size, so
/// fonts whose metrics never fit still terminate. Returns the chosen size,
/// the iterations used and the bounds measured at that size.
pub fn fit_font_size(target: f64, mut measure: impl FnMut(u32) -> InkBounds) -> (u32, u32, InkBounds) {
    let mut size = ((target * OVERSHOOT_FACTOR) as u32).max(MIN_FONT_SIZE);
    let mut iterations = 0;

    while iterations < MAX_ITERATIONS {
        iterations += 1;
        let bounds = measure(size);
        if bounds.fits_within(target) {
            return (size, iterations, bounds);
        }
        size = shrink(size);
    }

    (size, iterations, measure(size))
}

/// Renders icons at arbitrary sizes from one set of tokens and one font
pub struct IconRenderer<'a> {
    tokens: &'a DesignTokens,
    fonts: &'a FontProvider,
}

impl<'a> IconRenderer<'a> {
    pub fn new(tokens: &'a DesignTokens, fonts: &'a FontProvider) -> Self {
        Self { tokens, fonts }
    }

    /// Size and place the glyph for a `px × px` canvas
    pub fn fit(&self, px: u32) -> FitOutcome {
        let target = self.tokens.target_extent(px);
        let glyph = self.tokens.glyph.as_str();
        let (font_size, iterations, bounds) =
            fit_font_size(target, |size| self.fonts.load(size).measure(glyph));

        let centered = |extent: u32| ((px as f64 - extent as f64) / 2.0).round() as i32;
        let placement = Position::new(centered(bounds.width()), centered(bounds.height()));

        debug!(
            size = px,
            font_size,
            iterations,
            ink_width = bounds.width(),
            ink_height = bounds.height(),
            extent = target,
            "Fitted glyph"
        );

        FitOutcome {
            font_size,
            iterations,
            bounds,
            placement,
        }
    }

    /// Render a `px × px` icon
    pub fn render(&self, px: u32) -> Result<RenderedIcon> {
        if px == 0 {
            bail!("Icon size must be positive");
        }

        let fit = self.fit(px);
        let run = self.fonts.load(fit.font_size).layout(&self.tokens.glyph);
        let origin = fit.pen_origin();

        let mut canvas = Canvas::filled(px, self.tokens.background);
        if let Some(shadow) = self.tokens.shadow_for(px) {
            canvas.draw_run(&run, origin.offset(shadow.offset_for(px)), shadow.color);
        }
        canvas.draw_run(&run, origin, self.tokens.foreground);

        Ok(RenderedIcon { canvas, fit })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::icons;
    use crate::icon::sink::encode_png;

    fn table_sizes() -> impl Iterator<Item = u32> {
        icons::ANDROID.iter().chain(icons::IOS).map(|&(_, size)| size)
    }

    fn system_provider() -> FontProvider {
        FontProvider::resolve(&DesignTokens::default().font_candidates)
    }

    fn no_shadow() -> DesignTokens {
        DesignTokens {
            shadow: None,
            ..DesignTokens::default()
        }
    }

    /// Ink box of everything that differs from the background
    fn ink_box(canvas: &Canvas, background: [u8; 3]) -> Option<(u32, u32, u32, u32)> {
        let mut found: Option<(u32, u32, u32, u32)> = None;
        for y in 0..canvas.size() {
            for x in 0..canvas.size() {
                if canvas.pixel(x, y) != Some(background) {
                    found = Some(match found {
                        None => (x, y, x, y),
                        Some((l, t, r, b)) => (l.min(x), t.min(y), r.max(x), b.max(y)),
                    });
                }
            }
        }
        found
    }

    #[test]
    fn test_fit_accepts_first_size_that_fits() {
        let (size, iterations, _) = fit_font_size(100.0, |size| InkBounds::new(0, -(size as i32) / 2, 10, 0));
        assert_eq!(size, 105);
        assert_eq!(iterations, 1);
    }

    #[test]
    fn test_fit_shrinks_until_it_fits() {
        let mut measured = Vec::new();
        let (size, iterations, bounds) = fit_font_size(100.0, |size| {
            measured.push(size);
            InkBounds::new(0, -(size as i32), size as i32, 0)
        });
        // 105 -> 100 fits on the second attempt
        assert_eq!(measured[..2], [105, 100]);
        assert_eq!(size, 100);
        assert_eq!(iterations, 2);
        assert!(bounds.fits_within(100.0));
    }

    #[test]
    fn test_fit_terminates_for_pathological_metrics() {
        let mut calls = 0;
        let (size, iterations, _) = fit_font_size(50.0, |_| {
            calls += 1;
            InkBounds::new(0, -10_000, 10_000, 0)
        });
        assert_eq!(iterations, MAX_ITERATIONS);
        // Bounded loop plus the final re-measure
        assert_eq!(calls, MAX_ITERATIONS + 1);
        assert!(size >= MIN_FONT_SIZE);
    }

    #[test]
    fn test_fit_never_requests_zero() {
        let (size, _, _) = fit_font_size(0.5, |_| InkBounds::new(0, -10, 10, 0));
        assert_eq!(size, MIN_FONT_SIZE);
    }

    #[test]
    fn test_zero_size_is_rejected() {
        let tokens = DesignTokens::default();
        let fonts = FontProvider::builtin();
        assert!(IconRenderer::new(&tokens, &fonts).render(0).is_err());
    }

    #[test]
    fn test_output_dimensions_match_request() {
        let tokens = DesignTokens::default();
        let fonts = system_provider();
        let renderer = IconRenderer::new(&tokens, &fonts);

        for px in [1, 2, 20, 29, 48, 167] {
            let icon = renderer.render(px).unwrap();
            assert_eq!(icon.canvas.size(), px);
            assert_eq!(icon.canvas.data().len(), (px * px * 3) as usize);
        }
    }

    #[test]
    fn test_glyph_fits_inside_padding_for_all_table_sizes() {
        let tokens = DesignTokens::default();
        let fonts = system_provider();
        let renderer = IconRenderer::new(&tokens, &fonts);

        for px in table_sizes() {
            let fit = renderer.fit(px);
            let target = tokens.target_extent(px);
            assert!(
                fit.bounds.fits_within(target),
                "{}px: ink {}x{} exceeds {}",
                px,
                fit.bounds.width(),
                fit.bounds.height(),
                target
            );
        }
    }

    #[test]
    fn test_glyph_is_centered() {
        let tokens = DesignTokens::default();
        let fonts = system_provider();
        let renderer = IconRenderer::new(&tokens, &fonts);

        for px in table_sizes() {
            let fit = renderer.fit(px);
            let center = px as f32 / 2.0;
            let mid_x = fit.placement.x as f32 + fit.bounds.width() as f32 / 2.0;
            let mid_y = fit.placement.y as f32 + fit.bounds.height() as f32 / 2.0;
            assert!((mid_x - center).abs() < 1.0, "{}px: x midpoint {}", px, mid_x);
            assert!((mid_y - center).abs() < 1.0, "{}px: y midpoint {}", px, mid_y);
        }
    }

    #[test]
    fn test_rendered_ink_is_centered_with_bitmap_font() {
        let tokens = no_shadow();
        let fonts = FontProvider::builtin();
        let renderer = IconRenderer::new(&tokens, &fonts);

        for px in [20, 21, 48, 100] {
            let icon = renderer.render(px).unwrap();
            let (left, top, right, bottom) =
                ink_box(&icon.canvas, tokens.background.rgb()).expect("glyph was drawn");
            let center = (px as f32 - 1.0) / 2.0;
            assert!(((left + right) as f32 / 2.0 - center).abs() < 1.0);
            assert!(((top + bottom) as f32 / 2.0 - center).abs() < 1.0);
        }
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let tokens = DesignTokens::default();
        let fonts = system_provider();
        let renderer = IconRenderer::new(&tokens, &fonts);

        for px in [40, 152] {
            let first = encode_png(&renderer.render(px).unwrap().canvas).unwrap();
            let second = encode_png(&renderer.render(px).unwrap().canvas).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_small_icons_have_no_shadow() {
        let with_shadow = DesignTokens::default();
        let without_shadow = no_shadow();
        let fonts = system_provider();

        for px in [20, 29, 40, 47] {
            let a = IconRenderer::new(&with_shadow, &fonts).render(px).unwrap();
            let b = IconRenderer::new(&without_shadow, &fonts).render(px).unwrap();
            assert_eq!(a.canvas, b.canvas, "{}px should not have a shadow", px);
        }
    }

    #[test]
    fn test_large_icons_have_shadow() {
        let with_shadow = DesignTokens::default();
        let without_shadow = no_shadow();
        let fonts = system_provider();

        for px in [48, 192] {
            let a = IconRenderer::new(&with_shadow, &fonts).render(px).unwrap();
            let b = IconRenderer::new(&without_shadow, &fonts).render(px).unwrap();
            assert_ne!(a.canvas, b.canvas, "{}px should have a shadow", px);
        }
    }

    #[test]
    fn test_default_shadow_is_opaque() {
        let with_shadow = DesignTokens::default();
        let without_shadow = no_shadow();
        let fonts = FontProvider::builtin();

        let a = IconRenderer::new(&with_shadow, &fonts).render(192).unwrap();
        let b = IconRenderer::new(&without_shadow, &fonts).render(192).unwrap();

        // Bitmap coverage is all-or-nothing, so every pixel only the shadow
        // touches carries the exact shadow color
        let mut shadow_pixels = 0;
        for y in 0..192 {
            for x in 0..192 {
                if a.canvas.pixel(x, y) != b.canvas.pixel(x, y) {
                    assert_eq!(a.canvas.pixel(x, y), Some([180, 140, 80]), "({}, {})", x, y);
                    shadow_pixels += 1;
                }
            }
        }
        assert!(shadow_pixels > 0);
    }
}
