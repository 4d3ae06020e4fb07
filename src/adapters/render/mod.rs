//! Server-side rendering of page views.
//!
//! - `svg` - inline SVG charts
//! - `html` - full HTML documents with sidebar navigation

pub mod html;
pub mod svg;

pub use html::{render_error, render_page, Chrome};
pub use svg::render_chart;

/// Escape HTML and XML special characters.
pub(crate) fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_escapes_special_chars() {
        assert_eq!(escape("<script>"), "&lt;script&gt;");
        assert_eq!(escape("European Union & UK"), "European Union &amp; UK");
        assert_eq!(escape("\"quoted\""), "&quot;quoted&quot;");
    }
}
