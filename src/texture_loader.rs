use std::io::Cursor;

use anyhow::{Context, Result, anyhow};
use exif::{In, Reader, Tag, Value};
use raylib::prelude::*;
use tracing::warn;

use crate::loader::ImageRef;

/// Raw image bytes downloaded for one entry of the image list.
pub struct FetchedImage {
    pub source: ImageRef,
    pub bytes: Vec<u8>,
}

/// Downloads every referenced image, in list order. A failed download is
/// logged and skipped; the sequence simply gets shorter.
pub async fn download_images(client: &reqwest::Client, refs: &[ImageRef]) -> Vec<FetchedImage> {
    let mut fetched = Vec::with_capacity(refs.len());
    for source in refs {
        match download_one(client, source).await {
            Ok(bytes) => fetched.push(FetchedImage {
                source: source.clone(),
                bytes,
            }),
            Err(e) => warn!("skipping image {source}: {e:#}"),
        }
    }
    fetched
}

async fn download_one(client: &reqwest::Client, url: &str) -> Result<Vec<u8>> {
    let bytes = client
        .get(url)
        .send()
        .await
        .context("request failed")?
        .error_for_status()
        .context("server rejected the request")?
        .bytes()
        .await
        .context("failed to read image body")?;
    Ok(bytes.to_vec())
}

// --- Decode Bytes, Apply EXIF Rotation, Create Texture ---
pub fn texture_from_bytes(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image: &FetchedImage,
) -> Result<Texture2D> {
    let hint = extension_hint(&image.bytes, &image.source);
    let mut decoded = Image::load_image_from_mem(hint, &image.bytes)
        .map_err(|e| anyhow!("failed to decode {}: {e}", image.source))?;

    // Apply rotation based on orientation value
    // 1 = Top-left (Normal)
    // 3 = Bottom-right (180 deg)
    // 6 = Top-right (90 deg clockwise)
    // 8 = Bottom-left (270 deg clockwise / 90 deg counter-clockwise)
    // Others involve flips, ignored for simplicity here.
    match exif_orientation(&image.bytes) {
        3 => {
            decoded.rotate_cw();
            decoded.rotate_cw(); // 180 deg
        }
        6 => {
            decoded.rotate_cw(); // 90 deg clockwise
        }
        8 => {
            decoded.rotate_ccw(); // 90 deg counter-clockwise
        }
        _ => { /* No rotation needed for 1 or others */ }
    }

    let texture = rl
        .load_texture_from_image(thread, &decoded)
        .map_err(|e| anyhow!("failed to create texture for {}: {e}", image.source))?;

    // Unload the Image data from CPU memory (important!)
    drop(decoded);

    Ok(texture)
}

fn exif_orientation(bytes: &[u8]) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(bytes)) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| match &field.value {
                Value::Short(values) => values.first().copied(),
                _ => None,
            })
            .unwrap_or(1),
        Err(_) => 1,
    }
}

/// Filetype hint for decoding from memory. Magic bytes win; the URL
/// extension is the fallback for servers that send unrecognizable headers.
fn extension_hint(bytes: &[u8], source: &str) -> &'static str {
    if bytes.starts_with(&[0x89, b'P', b'N', b'G']) {
        return ".png";
    }
    if bytes.starts_with(&[0xFF, 0xD8]) {
        return ".jpg";
    }
    if bytes.starts_with(b"GIF8") {
        return ".gif";
    }
    if bytes.starts_with(b"BM") {
        return ".bmp";
    }
    let path = source.split(['?', '#']).next().unwrap_or(source);
    match path
        .rsplit('.')
        .next()
        .map(|ext| ext.to_ascii_lowercase())
        .as_deref()
    {
        Some("jpg" | "jpeg") => ".jpg",
        Some("gif") => ".gif",
        Some("bmp") => ".bmp",
        _ => ".png",
    }
}
