use crate::error::StoreError;
use crate::images::types::DecodedImage;

/// Decode and shrink an image so its longest side is at most `max_dimension`
pub fn decode_image(url: &str, bytes: &[u8], max_dimension: u32) -> Result<DecodedImage, StoreError> {
    let mut img = image::load_from_memory(bytes).map_err(|source| StoreError::Decode {
        url: url.to_string(),
        source,
    })?;

    if max_dimension > 0 && (img.width() > max_dimension || img.height() > max_dimension) {
        img = img.thumbnail(max_dimension, max_dimension);
    }

    let rgba = img.to_rgba8();
    Ok(DecodedImage {
        size: [rgba.width() as usize, rgba.height() as usize],
        rgba: rgba.into_raw(),
    })
}

#[cfg(test)]
pub(crate) fn encode_test_png(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba([200, 40, 40, 255]));
    let mut bytes = std::io::Cursor::new(Vec::new());
    img.write_to(&mut bytes, image::ImageFormat::Png).unwrap();
    bytes.into_inner()
}
