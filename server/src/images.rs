use std::io::Cursor;

use base64::{engine::general_purpose::STANDARD, Engine};
use image::codecs::jpeg::JpegEncoder;
use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageFormat, ImageReader, Rgb, RgbImage};

/// Formats accepted for recipe images.
pub const ALLOWED_FORMATS: &[ImageFormat] = &[
    ImageFormat::Jpeg,
    ImageFormat::Png,
    ImageFormat::Gif,
    ImageFormat::WebP,
];

pub const MAX_IMAGE_WIDTH: u32 = 1200;
pub const JPEG_QUALITY: u8 = 85;

/// Shrink an uploaded image to at most `MAX_IMAGE_WIDTH` wide and re-encode
/// it as JPEG. Transparent areas become white.
pub fn compress_recipe_image(data: &[u8]) -> Result<Vec<u8>, String> {
    let reader = ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .map_err(|e| format!("Failed to read image: {}", e))?;

    let format = reader
        .format()
        .ok_or_else(|| "Could not detect image format".to_string())?;

    if !ALLOWED_FORMATS.contains(&format) {
        return Err(format!(
            "Unsupported image format: {:?}. Allowed: JPEG, PNG, GIF, WebP",
            format
        ));
    }

    let img = reader
        .decode()
        .map_err(|e| format!("Failed to decode image: {}", e))?;

    let mut rgb = flatten_onto_white(img);
    if rgb.width() > MAX_IMAGE_WIDTH {
        let scaled = u64::from(rgb.height()) * u64::from(MAX_IMAGE_WIDTH) / u64::from(rgb.width());
        let height = scaled.max(1) as u32;
        rgb = imageops::resize(&rgb, MAX_IMAGE_WIDTH, height, FilterType::Lanczos3);
    }

    let mut buf = Cursor::new(Vec::new());
    JpegEncoder::new_with_quality(&mut buf, JPEG_QUALITY)
        .encode_image(&rgb)
        .map_err(|e| format!("Failed to encode image: {}", e))?;

    Ok(buf.into_inner())
}

/// Inline JPEG suitable for the recipe `image` field.
pub fn jpeg_data_url(jpeg: &[u8]) -> String {
    format!("data:image/jpeg;base64,{}", STANDARD.encode(jpeg))
}

fn flatten_onto_white(img: DynamicImage) -> RgbImage {
    if !img.color().has_alpha() {
        return img.into_rgb8();
    }

    let rgba = img.into_rgba8();
    let mut rgb = RgbImage::new(rgba.width(), rgba.height());
    for (x, y, pixel) in rgba.enumerate_pixels() {
        let [r, g, b, a] = pixel.0;
        let alpha = u16::from(a);
        let blend = |c: u8| ((u16::from(c) * alpha + 255 * (255 - alpha)) / 255) as u8;
        rgb.put_pixel(x, y, Rgb([blend(r), blend(g), blend(b)]));
    }
    rgb
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    /// PNG bytes of a `width` x `height` image whose left half is transparent.
    pub(crate) fn half_transparent_png(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_fn(width, height, |x, _| {
            if x < width / 2 {
                Rgba([0, 0, 0, 0])
            } else {
                Rgba([200, 30, 30, 255])
            }
        });
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, ImageFormat::Png).unwrap();
        buf.into_inner()
    }

    fn decode(jpeg: &[u8]) -> (ImageFormat, RgbImage) {
        let reader = ImageReader::new(Cursor::new(jpeg))
            .with_guessed_format()
            .unwrap();
        let format = reader.format().unwrap();
        (format, reader.decode().unwrap().into_rgb8())
    }

    #[test]
    fn test_wide_image_is_resized() {
        let jpeg = compress_recipe_image(&half_transparent_png(2400, 100)).unwrap();
        let (format, img) = decode(&jpeg);

        assert_eq!(format, ImageFormat::Jpeg);
        assert_eq!(img.dimensions(), (1200, 50));
    }

    #[test]
    fn test_transparency_becomes_white() {
        let jpeg = compress_recipe_image(&half_transparent_png(40, 20)).unwrap();
        let (_, img) = decode(&jpeg);

        assert_eq!(img.dimensions(), (40, 20));
        let Rgb([r, g, b]) = *img.get_pixel(2, 10);
        assert!(r > 240 && g > 240 && b > 240);
    }

    #[test]
    fn test_rejects_non_image() {
        let err = compress_recipe_image(b"definitely not an image").unwrap_err();
        assert_eq!(err, "Could not detect image format");
    }

    #[test]
    fn test_data_url() {
        assert_eq!(jpeg_data_url(&[0xff, 0xd8]), "data:image/jpeg;base64,/9g=");
    }
}
