//! The supported display modules and their panel geometry
//!
//! Every module only differs in its size, its initialization sequence and the
//! column offset needed when the view is mirrored. All of that is captured in
//! [`PanelGeometry`] once at construction, nothing downstream matches on
//! [`Variant`] again.

/// Height of one display memory page in pixel
pub const PAGE_HEIGHT: u32 = 8;

/// One of the four supported displays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// EA DOGM128-6, ST7565R, 128x64
    #[default]
    Dogm128,
    /// EA DOGL128-6, ST7565R, 128x64
    Dogl128,
    /// EA DOGM132-5, ST7565R, 132x32
    Dogm132,
    /// EA DOGS102-6, UC1701, 102x64
    Dogs102,
}

/// Size and addressing quirks of a panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelGeometry {
    /// Number of visible columns
    pub columns: u8,
    /// Number of 8 pixel high pages
    pub pages: u8,
    /// Column offset added while the view is mirrored (top view)
    pub mirror_offset: u8,
}

impl PanelGeometry {
    /// Height in pixel
    pub fn height(&self) -> u32 {
        u32::from(self.pages) * PAGE_HEIGHT
    }

    /// Tests whether a (signed) column lies on the panel
    pub(crate) fn contains_column(&self, column: i32) -> bool {
        (0..i32::from(self.columns)).contains(&column)
    }

    /// Tests whether a (signed) page lies on the panel
    pub(crate) fn contains_page(&self, page: i32) -> bool {
        (0..i32::from(self.pages)).contains(&page)
    }
}

const INIT_DOGM128: [u8; 14] = [
    0x40, 0xA1, 0xC0, 0xA6, 0xA2, 0x2F, 0xF8, 0x00, 0x27, 0x81, 0x16, 0xAC, 0x00, 0xAF,
];
const INIT_DOGL128: [u8; 14] = [
    0x40, 0xA1, 0xC0, 0xA6, 0xA2, 0x2F, 0xF8, 0x00, 0x27, 0x81, 0x10, 0xAC, 0x00, 0xAF,
];
const INIT_DOGM132: [u8; 14] = [
    0x40, 0xA1, 0xC0, 0xA6, 0xA2, 0x2F, 0xF8, 0x00, 0x23, 0x81, 0x1F, 0xAC, 0x00, 0xAF,
];
// UC1701 takes a shorter sequence
const INIT_DOGS102: [u8; 13] = [
    0x40, 0xA1, 0xC0, 0xA4, 0xA6, 0xA2, 0x2F, 0x27, 0x81, 0x10, 0xFA, 0x90, 0xAF,
];

impl Variant {
    /// Geometry of the panel
    pub const fn geometry(self) -> PanelGeometry {
        match self {
            Variant::Dogm128 | Variant::Dogl128 => PanelGeometry {
                columns: 128,
                pages: 8,
                mirror_offset: 4,
            },
            Variant::Dogm132 => PanelGeometry {
                columns: 132,
                pages: 4,
                mirror_offset: 0,
            },
            Variant::Dogs102 => PanelGeometry {
                columns: 102,
                pages: 8,
                mirror_offset: 4,
            },
        }
    }

    /// Vendor initialization sequence, sent in command mode after the reset
    pub const fn init_sequence(self) -> &'static [u8] {
        match self {
            Variant::Dogm128 => &INIT_DOGM128,
            Variant::Dogl128 => &INIT_DOGL128,
            Variant::Dogm132 => &INIT_DOGM132,
            Variant::Dogs102 => &INIT_DOGS102,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_sizes() {
        let g = Variant::Dogm128.geometry();
        assert_eq!((g.columns, g.pages, g.mirror_offset), (128, 8, 4));
        let g = Variant::Dogl128.geometry();
        assert_eq!((g.columns, g.pages, g.mirror_offset), (128, 8, 4));
        let g = Variant::Dogm132.geometry();
        assert_eq!((g.columns, g.pages, g.mirror_offset), (132, 4, 0));
        assert_eq!(g.height(), 32);
        let g = Variant::Dogs102.geometry();
        assert_eq!((g.columns, g.pages, g.mirror_offset), (102, 8, 4));
        assert_eq!(g.height(), 64);
    }

    #[test]
    fn never_wider_than_row_buffer() {
        for v in [
            Variant::Dogm128,
            Variant::Dogl128,
            Variant::Dogm132,
            Variant::Dogs102,
        ] {
            assert!(usize::from(v.geometry().columns) <= crate::MAX_COLUMNS);
        }
    }

    #[test]
    fn init_sequences() {
        assert_eq!(Variant::Dogm128.init_sequence().len(), 14);
        assert_eq!(Variant::Dogl128.init_sequence()[10], 0x10);
        assert_eq!(Variant::Dogm132.init_sequence()[8], 0x23);
        assert_eq!(Variant::Dogs102.init_sequence().len(), 13);
        for v in [
            Variant::Dogm128,
            Variant::Dogl128,
            Variant::Dogm132,
            Variant::Dogs102,
        ] {
            // every sequence ends by switching the panel on
            assert_eq!(v.init_sequence().last(), Some(&0xAF));
        }
    }

    #[test]
    fn bounds() {
        let g = Variant::Dogm132.geometry();
        assert!(g.contains_column(0));
        assert!(g.contains_column(131));
        assert!(!g.contains_column(132));
        assert!(!g.contains_column(-1));
        assert!(g.contains_page(3));
        assert!(!g.contains_page(4));
    }
}
