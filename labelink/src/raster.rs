// labelink/labelink/src/raster.rs

//! Image encoder: RGBA pixels to ordered 1-bit row packets.
//!
//! Each horizontal line of the source becomes one wire frame of command
//! type 0x85 carrying a 6-byte row header and the line packed MSB-first,
//! one bit per dot (bit 7 = leftmost dot, 1 = ink). The printer has no
//! frame reordering capability, so packets must be transmitted in row
//! order exactly as produced here.

use image::{imageops, Rgba, RgbaImage};

use crate::constants::CMD_IMAGE_ROW;
use crate::protocol::Frame;
use crate::{Error, Result};

/// Widest printable row: the row header plus packed bits must fit one frame.
const MAX_ROW_PAYLOAD: usize = crate::constants::MAX_PAYLOAD_LEN - ROW_HEADER_LEN;

/// Row header: row index(be u16) + 3 reserved zero bytes + flag byte of 1
const ROW_HEADER_LEN: usize = 6;

/// Options applied while thresholding the source image.
#[derive(Debug, Clone, Copy, Default)]
pub struct RasterOptions {
    /// Rotate the source 90 degrees clockwise before thresholding
    pub rotate: bool,
    /// Print light pixels instead of dark ones
    pub invert_color: bool,
}

/// A thresholded 1-bit image, one packed byte row per source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    rows: Vec<Vec<u8>>,
}

impl Raster {
    /// Threshold an RGBA image into packed rows.
    pub fn from_image(image: &RgbaImage, options: RasterOptions) -> Result<Self> {
        let rotated;
        let image = if options.rotate {
            rotated = imageops::rotate90(image);
            &rotated
        } else {
            image
        };

        let (width, height) = image.dimensions();
        let row_bytes = ((width as usize) + 7) / 8;
        if row_bytes > MAX_ROW_PAYLOAD {
            return Err(Error::InvalidArgument(format!(
                "image width {} exceeds {} printable dots",
                width,
                MAX_ROW_PAYLOAD * 8
            )));
        }
        if height > u32::from(u16::MAX) {
            return Err(Error::InvalidArgument(format!(
                "image height {} exceeds row index range",
                height
            )));
        }

        let mut rows = Vec::with_capacity(height as usize);
        for y in 0..height {
            let mut packed = vec![0u8; row_bytes];
            for x in 0..width {
                if is_ink(image.get_pixel(x, y), options.invert_color) {
                    packed[(x / 8) as usize] |= 1 << (7 - x % 8);
                }
            }
            rows.push(packed);
        }

        Ok(Self {
            width,
            height,
            rows,
        })
    }

    /// Threshold a raw RGBA8 buffer of length `width * height * 4`.
    pub fn from_rgba(rgba: &[u8], width: u32, height: u32, options: RasterOptions) -> Result<Self> {
        let expected = width as usize * height as usize * 4;
        if rgba.len() != expected {
            return Err(Error::InvalidArgument(format!(
                "RGBA buffer is {} bytes, {}x{} needs {}",
                rgba.len(),
                width,
                height,
                expected
            )));
        }
        let image = RgbaImage::from_raw(width, height, rgba.to_vec())
            .ok_or_else(|| Error::InvalidArgument("RGBA buffer does not fit dimensions".into()))?;
        Self::from_image(&image, options)
    }

    /// Width in dots after rotation.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in rows after rotation.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The packed bitmap rows, top to bottom.
    pub fn rows(&self) -> &[Vec<u8>] {
        &self.rows
    }

    /// Encode every row as a framed 0x85 packet, in transmit order.
    pub fn row_packets(&self) -> Result<Vec<Vec<u8>>> {
        let mut packets = Vec::with_capacity(self.rows.len());
        for (y, packed) in self.rows.iter().enumerate() {
            let mut payload = Vec::with_capacity(ROW_HEADER_LEN + packed.len());
            payload.extend_from_slice(&row_header(y as u16));
            payload.extend_from_slice(packed);
            packets.push(Frame::encode(CMD_IMAGE_ROW, &payload)?);
        }
        Ok(packets)
    }
}

/// Classify one pixel: ink iff sufficiently opaque and dark.
/// `invert` flips the luminance side of the test, never the alpha gate.
fn is_ink(pixel: &Rgba<u8>, invert: bool) -> bool {
    let [r, g, b, a] = pixel.0;
    if a < 128 {
        return false;
    }
    let dark = luminance(r, g, b) < 128;
    dark != invert
}

/// Integer BT.601 luma, rounded: (299 R + 587 G + 114 B) / 1000
fn luminance(r: u8, g: u8, b: u8) -> u8 {
    let weighted = 299 * u32::from(r) + 587 * u32::from(g) + 114 * u32::from(b);
    ((weighted + 500) / 1000) as u8
}

/// Build the 6-byte row header for row `y` (big-endian row index).
fn row_header(y: u16) -> [u8; ROW_HEADER_LEN] {
    let idx = y.to_be_bytes();
    [idx[0], idx[1], 0, 0, 0, 1]
}
