//! Cell style specs and their conversion to `rust_xlsxwriter` formats.

use rust_xlsxwriter::{Color, Format, FormatAlign};

/// Horizontal alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

/// Vertical alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VAlign {
    Top,
    Center,
    Bottom,
}

/// Style spec with optional fields; `None` leaves the workbook default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellStyle {
    pub bold: Option<bool>,
    /// Font size in points
    pub font_size: Option<u16>,
    /// Solid fill as `0xRRGGBB`
    pub fill: Option<u32>,
    pub align: Option<HAlign>,
    pub valign: Option<VAlign>,
    pub wrap: Option<bool>,
}

impl CellStyle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn bold(mut self) -> Self {
        self.bold = Some(true);
        self
    }

    #[must_use]
    pub fn font_size(mut self, size: u16) -> Self {
        self.font_size = Some(size);
        self
    }

    #[must_use]
    pub fn fill(mut self, rgb: u32) -> Self {
        self.fill = Some(rgb);
        self
    }

    #[must_use]
    pub fn align(mut self, align: HAlign) -> Self {
        self.align = Some(align);
        self
    }

    #[must_use]
    pub fn valign(mut self, valign: VAlign) -> Self {
        self.valign = Some(valign);
        self
    }

    #[must_use]
    pub fn wrap(mut self) -> Self {
        self.wrap = Some(true);
        self
    }

    /// Overlay `other` onto `self`; set fields on the right win.
    #[must_use]
    pub fn merge(&self, other: &CellStyle) -> CellStyle {
        CellStyle {
            bold: other.bold.or(self.bold),
            font_size: other.font_size.or(self.font_size),
            fill: other.fill.or(self.fill),
            align: other.align.or(self.align),
            valign: other.valign.or(self.valign),
            wrap: other.wrap.or(self.wrap),
        }
    }

    #[must_use]
    pub fn to_format(&self) -> Format {
        let mut format = Format::new();

        if self.bold.unwrap_or(false) {
            format = format.set_bold();
        }
        if let Some(size) = self.font_size {
            format = format.set_font_size(f64::from(size));
        }
        if let Some(rgb) = self.fill {
            format = format.set_background_color(Color::RGB(rgb));
        }
        if let Some(align) = self.align {
            format = format.set_align(match align {
                HAlign::Left => FormatAlign::Left,
                HAlign::Center => FormatAlign::Center,
                HAlign::Right => FormatAlign::Right,
            });
        }
        if let Some(valign) = self.valign {
            format = format.set_align(match valign {
                VAlign::Top => FormatAlign::Top,
                VAlign::Center => FormatAlign::VerticalCenter,
                VAlign::Bottom => FormatAlign::Bottom,
            });
        }
        if self.wrap.unwrap_or(false) {
            format = format.set_text_wrap();
        }

        format
    }
}

/// Light grey header fill
pub const HEADER_FILL: u32 = 0xF2_F2F2;

/// Bold, filled, centered header
#[must_use]
pub fn header_style() -> CellStyle {
    CellStyle::new().bold().fill(HEADER_FILL).align(HAlign::Center)
}

/// Header that also wraps and hangs from the top
#[must_use]
pub fn wrapped_header_style() -> CellStyle {
    header_style().valign(VAlign::Top).wrap()
}

/// Wrapped body text hanging from the top
#[must_use]
pub fn wrapped_body_style() -> CellStyle {
    CellStyle::new().valign(VAlign::Top).wrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_right_wins() {
        let base = CellStyle::new().bold().align(HAlign::Left);
        let patch = CellStyle::new().align(HAlign::Center).wrap();
        let merged = base.merge(&patch);

        assert_eq!(merged.bold, Some(true));
        assert_eq!(merged.align, Some(HAlign::Center));
        assert_eq!(merged.wrap, Some(true));
        assert_eq!(merged.fill, None);
    }

    #[test]
    fn test_wrapped_header_extends_header() {
        let style = wrapped_header_style();
        assert_eq!(style.fill, Some(HEADER_FILL));
        assert_eq!(style.align, Some(HAlign::Center));
        assert_eq!(style.valign, Some(VAlign::Top));
        assert_eq!(style.wrap, Some(true));
    }

    #[test]
    fn test_equal_specs_give_equal_formats() {
        assert_eq!(header_style().to_format(), header_style().to_format());
        assert_ne!(header_style().to_format(), wrapped_body_style().to_format());
    }
}
