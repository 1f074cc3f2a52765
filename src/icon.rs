//! ICO encoding of rendered bitmaps.

use std::fs;
use std::path::Path;

use image::DynamicImage;
use image::imageops::FilterType;

use crate::error::ConvertError;

/// Square sizes written into every icon, smallest first.
pub const ICON_SIZES: [u32; 6] = [16, 32, 48, 64, 128, 256];

/// Build an icon directory with one RGBA entry per size in [`ICON_SIZES`].
pub fn build_icon_dir(img: &DynamicImage) -> Result<ico::IconDir, ConvertError> {
    // Normalize first so every resized copy carries an alpha channel
    let rgba = DynamicImage::ImageRgba8(img.to_rgba8());

    let mut icon_dir = ico::IconDir::new(ico::ResourceType::Icon);
    for size in ICON_SIZES {
        let resized = rgba.resize_exact(size, size, FilterType::Lanczos3);
        let icon_image = ico::IconImage::from_rgba_data(size, size, resized.to_rgba8().into_raw());
        let entry = ico::IconDirEntry::encode(&icon_image)
            .map_err(|e| ConvertError::IconEncode { size, source: e })?;
        icon_dir.add_entry(entry);
    }

    Ok(icon_dir)
}

/// Encode `img` as a multi-size ICO file at `output`.
///
/// The whole container is encoded in memory before `output` is touched, so a
/// failed encode never leaves a partial file.
pub fn encode_ico(img: &DynamicImage, output: &Path) -> Result<(), ConvertError> {
    let icon_dir = build_icon_dir(img)?;

    let mut buf = Vec::new();
    icon_dir
        .write(&mut buf)
        .map_err(|e| ConvertError::io(output, e))?;
    fs::write(output, buf).map_err(|e| ConvertError::io(output, e))?;

    log::info!("Wrote {} icon entries to {}", ICON_SIZES.len(), output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba, RgbaImage};
    use std::fs::File;
    use tempfile::tempdir;

    fn half_transparent(width: u32, height: u32) -> DynamicImage {
        let img = RgbaImage::from_fn(width, height, |x, _| {
            if x < width / 2 {
                Rgba([0, 0, 0, 0])
            } else {
                Rgba([200, 30, 30, 255])
            }
        });
        DynamicImage::ImageRgba8(img)
    }

    #[test]
    fn contains_every_size() {
        let icon_dir = build_icon_dir(&half_transparent(1024, 1024)).unwrap();

        let sizes: Vec<(u32, u32)> = icon_dir
            .entries()
            .iter()
            .map(|e| (e.width(), e.height()))
            .collect();

        assert_eq!(
            sizes,
            vec![(16, 16), (32, 32), (48, 48), (64, 64), (128, 128), (256, 256)]
        );
    }

    #[test]
    fn entries_are_32_bit() {
        let icon_dir = build_icon_dir(&half_transparent(300, 300)).unwrap();
        for entry in icon_dir.entries() {
            assert_eq!(entry.bits_per_pixel(), 32);
        }
    }

    #[test]
    fn opaque_rgb_gains_alpha() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(64, 64, Rgb([10, 20, 30])));
        let icon_dir = build_icon_dir(&img).unwrap();

        let decoded = icon_dir.entries()[0].decode().unwrap();
        assert_eq!(decoded.rgba_data().len(), 16 * 16 * 4);
        assert!(decoded.rgba_data().chunks(4).all(|px| px[3] == 255));
    }

    #[test]
    fn transparency_survives_resampling() {
        let icon_dir = build_icon_dir(&half_transparent(1024, 1024)).unwrap();

        let decoded = icon_dir.entries()[1].decode().unwrap();
        let rgba = decoded.rgba_data();
        // top-left pixel sits in the transparent half, top-right in the opaque half
        assert!(rgba[3] < 5);
        assert!(rgba[(32 - 1) * 4 + 3] > 250);
    }

    // non-square input is stretched, not letterboxed
    #[test]
    fn non_square_source_is_stretched_to_square() {
        let icon_dir = build_icon_dir(&half_transparent(800, 200)).unwrap();
        for (entry, size) in icon_dir.entries().iter().zip(ICON_SIZES) {
            assert_eq!(entry.width(), size);
            assert_eq!(entry.height(), size);
        }
    }

    #[test]
    fn encode_writes_readable_ico() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("icon.ico");

        encode_ico(&half_transparent(512, 512), &output).unwrap();

        let icon_dir = ico::IconDir::read(File::open(&output).unwrap()).unwrap();
        assert_eq!(icon_dir.resource_type(), ico::ResourceType::Icon);
        assert_eq!(icon_dir.entries().len(), ICON_SIZES.len());
    }

    #[test]
    fn encode_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("missing").join("icon.ico");

        let result = encode_ico(&half_transparent(64, 64), &output);

        assert!(matches!(result, Err(ConvertError::Io { .. })));
        assert!(!output.exists());
    }
}
