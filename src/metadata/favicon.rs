//! Favicon selection.
//!
//! Preference order: SVG, then the PNG with the largest declared size, then ICO,
//! then the first `icon` / `shortcut icon` hrefs seen, then `/favicon.ico`.

use super::Metadata;
use crate::config::{
    DEFAULT_FAVICON, ICO_MIME_TYPE, PNG_MIME_TYPE, REL_ICON, REL_SHORTCUT_ICON, SVG_MIME_TYPE,
};
use crate::models::Favicon;

fn is_svg(favicon: &Favicon) -> bool {
    favicon.has_type(SVG_MIME_TYPE) || favicon.has_extension("svg")
}

fn is_png(favicon: &Favicon) -> bool {
    favicon.has_type(PNG_MIME_TYPE) || favicon.has_extension("png")
}

fn is_ico(favicon: &Favicon) -> bool {
    let icon_rel = favicon
        .rel()
        .is_some_and(|rel| rel == REL_ICON || rel == REL_SHORTCUT_ICON);
    favicon.has_type(ICO_MIME_TYPE) || (icon_rel && favicon.has_extension("ico"))
}

/// The PNG declaring the largest area; the first PNG if none declares a usable size.
fn best_png(favicons: &[Favicon]) -> Option<&Favicon> {
    let mut first_png = None;
    let mut largest: Option<(u64, &Favicon)> = None;

    for favicon in favicons.iter().filter(|f| is_png(f)) {
        first_png.get_or_insert(favicon);
        if let Some(area) = favicon.largest_declared_area() {
            if largest.map_or(true, |(best, _)| area > best) {
                largest = Some((area, favicon));
            }
        }
    }

    largest.map(|(_, favicon)| favicon).or(first_png)
}

impl Metadata {
    /// The preferred favicon href. Never empty; `/favicon.ico` when nothing is declared.
    pub fn favicon(&self) -> &str {
        let selected = self
            .favicons
            .iter()
            .find(|f| is_svg(f))
            .or_else(|| best_png(&self.favicons))
            .or_else(|| self.favicons.iter().find(|f| is_ico(f)));

        if let Some(favicon) = selected {
            return favicon.href();
        }

        self.icon_href
            .as_deref()
            .or(self.shortcut_icon_href.as_deref())
            .unwrap_or(DEFAULT_FAVICON)
    }
}
