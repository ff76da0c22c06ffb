//! Text measurement for label backgrounds.
//!
//! Uses cosmic-text with a process-wide `FontSystem`: creating one is
//! expensive, and measurement only needs shared access behind a lock.

use std::sync::{Mutex, OnceLock};

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping};
use log::info;

use crate::geometry::Size;

static FONT_SYSTEM: OnceLock<Mutex<FontSystem>> = OnceLock::new();

/// Calculate the rendered size of a single line of text in pixels.
///
/// Shapes the text with real font metrics so label boxes fit what the
/// viewer's renderer will actually draw. Falls back to a width estimate
/// proportional to the character count when no font is available.
pub fn calculate_text_size(text: &str, font_size_px: f32) -> Size {
    let font_system = FONT_SYSTEM.get_or_init(|| {
        info!("Initializing FontSystem");
        Mutex::new(FontSystem::new())
    });
    let mut font_system = font_system.lock().unwrap();

    let line_height = font_size_px * 1.2;
    let metrics = Metrics::new(font_size_px, line_height);

    let mut buffer = Buffer::new(&mut font_system, metrics);
    let mut buffer = buffer.borrow_with(&mut font_system);

    let attrs = Attrs::new().family(Family::Name("Arial"));

    // Unconstrained buffer so the line does not wrap
    buffer.set_size(None, None);
    buffer.set_text(text, &attrs, Shaping::Advanced, None);
    buffer.shape_until_scroll(true);

    let mut max_width: f32 = 0.0;
    let mut total_height: f32 = 0.0;

    let layout_runs: Vec<_> = buffer.layout_runs().collect();
    if layout_runs.is_empty() {
        max_width = text.len() as f32 * (font_size_px * 0.6);
        total_height = metrics.line_height;
    } else {
        for run in &layout_runs {
            if let Some(last) = run.glyphs.last() {
                max_width = max_width.max(last.x + last.w);
            }
            total_height += metrics.line_height;
        }
    }

    Size::new(max_width, total_height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_longer_text_is_wider() {
        let short = calculate_text_size("Jira", 12.0);
        let long = calculate_text_size("GitHub Actions", 12.0);
        assert!(long.width() > short.width());
    }

    #[test]
    fn test_single_line_height() {
        let size = calculate_text_size("ChatGPT-4", 12.0);
        assert!(size.height() > 0.0);
        assert!(size.height() < 12.0 * 1.2 * 2.0);
    }
}
