mod classic;
mod custom;
mod stats;

pub use classic::ClassicBoard;
pub use custom::CustomBoard;
pub use stats::StatsBoard;

use crate::theme::Palette;

pub fn page_style(palette: &Palette) -> String {
    format!(
        "min-height: 100vh; background: {}; display: flex; flex-direction: column; align-items: center; \
         padding: 40px 16px; font-family: system-ui, -apple-system, sans-serif; color: {}; \
         position: relative; overflow-x: hidden; box-sizing: border-box;",
        palette.page_bg, palette.text
    )
}

/// Soft drifting color blobs behind the board
pub fn blob_style(top: &str, side: &str, color: &str, delay_s: u32) -> String {
    format!(
        "position: absolute; top: {top}; {side}; width: 384px; height: 384px; background: {color}; \
         border-radius: 9999px; filter: blur(64px); opacity: 0.7; pointer-events: none; \
         animation: blob 7s infinite; animation-delay: {delay_s}s;"
    )
}

pub const COLUMN_STYLE: &str =
    "width: 100%; max-width: 448px; position: relative; z-index: 10; display: flex; flex-direction: column; gap: 16px;";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    #[test]
    fn page_style_uses_palette() {
        let style = page_style(Theme::Light.palette());
        assert!(style.contains(Theme::Light.palette().page_bg));
    }

    #[test]
    fn blob_style_offsets_animation() {
        let style = blob_style("0", "left: 0", "rgba(99,102,241,0.3)", 2);
        assert!(style.contains("animation-delay: 2s"));
        assert!(style.contains("left: 0;"));
    }
}
