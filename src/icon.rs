use eframe::egui::ColorImage;

use crate::source::Asset;

/// Decodes an embedded PNG asset into an egui color image.
pub fn load_icon(name: &str) -> Option<ColorImage> {
    // Look the icon up among the bundled assets, returning None on any error
    let data = Asset::get(name)?;
    // Decode with the image crate and convert to RGBA8
    let img = image::load_from_memory(&data.data).ok()?.to_rgba8();
    // Determine the image dimensions for egui
    let size = [img.width() as usize, img.height() as usize];
    // Create a ColorImage from the raw RGBA bytes without premultiplying alpha
    Some(ColorImage::from_rgba_unmultiplied(size, &img))
}

#[cfg(test)]
mod tests {
    use super::load_icon;

    #[test]
    fn the_download_glyph_decodes() {
        let img = load_icon("down-arrow.png").unwrap();
        assert_eq!(img.size, [12, 12]);
    }

    #[test]
    fn missing_icons_yield_none() {
        assert!(load_icon("no-such-icon.png").is_none());
    }
}
