//! Raster images in the BLH format of the EA BitMapEdit tool
//!
//! `[width, height, data...]`, the data being `ceil(height / 8)` page rows of
//! `width` bytes each.

/// How the bytes of a picture are sent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PictureStyle {
    /// As stored
    #[default]
    Normal,
    /// Every byte inverted, inverse video for this image only
    Inverse,
}

/// A picture borrowed from flash
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Picture<'a> {
    data: &'a [u8],
}

impl<'a> Picture<'a> {
    /// Wraps a picture blob
    pub const fn new(data: &'a [u8]) -> Self {
        Picture { data }
    }

    /// Width in pixel, as stored in the blob
    pub fn width(&self) -> u8 {
        self.data.first().copied().unwrap_or(0)
    }

    /// Height in pixel, as stored in the blob
    pub fn height(&self) -> u8 {
        self.data.get(1).copied().unwrap_or(0)
    }

    /// Number of page rows
    pub fn pages(&self) -> u8 {
        // compute in u16, a height of 255 must not overflow
        ((u16::from(self.height()) + 7) / 8) as u8
    }

    /// The first `len` bytes of page row `page`
    ///
    /// Rows always start at a multiple of the full width, also when only a part
    /// of each row is requested. Truncated blobs yield shorter slices.
    pub fn row(&self, page: u8, len: u8) -> &'a [u8] {
        let start = 2 + usize::from(page) * usize::from(self.width());
        let end = start + usize::from(len.min(self.width()));
        let data: &'a [u8] = self.data;
        let end = end.min(data.len());
        data.get(start..end).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 3x10 pixel, two pages
    const ARROW: [u8; 2 + 2 * 3] = [3, 10, 0x10, 0x38, 0x7C, 0x01, 0x02, 0x03];

    #[test]
    fn header() {
        let pic = Picture::new(&ARROW);
        assert_eq!(pic.width(), 3);
        assert_eq!(pic.height(), 10);
        assert_eq!(pic.pages(), 2);
        assert_eq!(Picture::new(&[1, 255]).pages(), 32);
        assert_eq!(Picture::new(&[]).pages(), 0);
    }

    #[test]
    fn rows_keep_full_stride() {
        let pic = Picture::new(&ARROW);
        assert_eq!(pic.row(0, 3), &[0x10, 0x38, 0x7C]);
        assert_eq!(pic.row(1, 3), &[0x01, 0x02, 0x03]);
        // truncated rows don't drift
        assert_eq!(pic.row(1, 2), &[0x01, 0x02]);
        assert_eq!(pic.row(1, 9), &[0x01, 0x02, 0x03]);
    }

    #[test]
    fn truncated_blob() {
        let pic = Picture::new(&ARROW[..6]);
        assert_eq!(pic.row(1, 3), &[0x01]);
        assert_eq!(pic.row(2, 3), &[] as &[u8]);
    }
}
