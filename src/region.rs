//! Sub-region geometry and validation.
//!
//! [`Region`] describes a rectangular window inside a larger pitched
//! buffer. It carries no reference to the buffer itself; span math and
//! the [`validate`](Region::validate) precondition gate are what the
//! cursor and iterator constructors build on.

use core::fmt;
use core::ops::Range;

// ---------------------------------------------------------------------------
// Region
// ---------------------------------------------------------------------------

/// Rectangular sub-region within a larger pitched buffer.
///
/// Coordinates and dimensions are in elements of the enclosing buffer.
/// `(x, y)` is the top-left corner; rows advance by the enclosing
/// buffer's pitch, which is supplied separately wherever physical
/// indices are computed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct Region {
    /// Left edge, in elements from the start of a row.
    pub x: u32,
    /// Top edge, in rows from the start of the buffer.
    pub y: u32,
    /// Row length of the sub-region, in elements.
    pub width: u32,
    /// Number of rows in the sub-region.
    pub height: u32,
}

impl Region {
    /// Create a region. No validation; that happens where the pitch and
    /// buffer are known (see [`validate`](Self::validate)).
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Number of elements covered, `width * height`.
    #[inline]
    pub const fn len(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Whether the region covers no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// One past the right edge, `x + width`.
    #[inline]
    pub const fn right(&self) -> u64 {
        self.x as u64 + self.width as u64
    }

    /// One past the bottom edge, `y + height`.
    #[inline]
    pub const fn bottom(&self) -> u64 {
        self.y as u64 + self.height as u64
    }

    /// Physical index range of region row `r` in a buffer of the given
    /// pitch: `(y + r) * pitch + x .. + width`.
    ///
    /// # Panics
    ///
    /// Panics if `r >= height`.
    #[inline]
    pub fn row_span(&self, pitch: usize, r: u32) -> Range<usize> {
        assert!(
            r < self.height,
            "row index {r} out of bounds (height: {})",
            self.height
        );
        let start = (self.y as usize + r as usize) * pitch + self.x as usize;
        start..start + self.width as usize
    }

    /// Minimum buffer length (in elements) that contains this region at
    /// the given pitch: `(y + height - 1) * pitch + x + width`, or 0 for
    /// an empty region. Rows after the last one need no trailing padding.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::Overflow`] if the footprint exceeds `usize`.
    pub fn min_buffer_len(&self, pitch: usize) -> Result<usize, RegionError> {
        if self.is_empty() {
            return Ok(0);
        }
        let last_row = (self.y as usize)
            .checked_add(self.height as usize - 1)
            .ok_or(RegionError::Overflow)?;
        let preceding = last_row.checked_mul(pitch).ok_or(RegionError::Overflow)?;
        let end = (self.x as usize)
            .checked_add(self.width as usize)
            .ok_or(RegionError::Overflow)?;
        preceding.checked_add(end).ok_or(RegionError::Overflow)
    }

    /// Check this region against a pitch and a buffer length.
    ///
    /// This is the single precondition gate used by every fallible
    /// constructor in the crate. It rejects geometry the address
    /// arithmetic cannot express; it does not reject `x + width > pitch`,
    /// where consecutive rows alias each other in the buffer — keeping
    /// rows disjoint is the caller's responsibility.
    ///
    /// # Errors
    ///
    /// - [`RegionError::ZeroWidth`] — `width == 0` with `height > 0`.
    /// - [`RegionError::PitchOverrun`] — `width > pitch`.
    /// - [`RegionError::Overflow`] — the footprint exceeds `usize`.
    /// - [`RegionError::InsufficientData`] — the buffer is shorter than
    ///   [`min_buffer_len`](Self::min_buffer_len).
    pub fn validate(&self, pitch: usize, buffer_len: usize) -> Result<(), RegionError> {
        if self.width == 0 && self.height != 0 {
            return Err(RegionError::ZeroWidth);
        }
        if self.width as usize > pitch {
            return Err(RegionError::PitchOverrun);
        }
        let needed = self.min_buffer_len(pitch)?;
        if buffer_len < needed {
            return Err(RegionError::InsufficientData);
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// RegionError
// ---------------------------------------------------------------------------

/// Errors from region validation and cursor construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum RegionError {
    /// Width is zero but height is not; the address formula divides by width.
    ZeroWidth,
    /// Width exceeds the enclosing buffer's pitch.
    PitchOverrun,
    /// Address arithmetic exceeds the platform's index range.
    Overflow,
    /// Buffer is shorter than the region's footprint.
    InsufficientData,
}

impl fmt::Display for RegionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroWidth => write!(f, "region width is zero"),
            Self::PitchOverrun => write!(f, "region width exceeds the buffer pitch"),
            Self::Overflow => write!(f, "region address arithmetic overflows"),
            Self::InsufficientData => {
                write!(f, "buffer is too small for the region footprint")
            }
        }
    }
}

impl core::error::Error for RegionError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    // --- span math ---

    #[test]
    fn len_and_is_empty() {
        assert_eq!(Region::new(2, 3, 4, 5).len(), 20);
        assert!(!Region::new(2, 3, 4, 5).is_empty());
        assert_eq!(Region::new(0, 0, 0, 0).len(), 0);
        assert!(Region::new(0, 0, 0, 0).is_empty());
        assert!(Region::new(1, 1, 4, 0).is_empty());
    }

    #[test]
    fn edges() {
        let r = Region::new(3, 2, 4, 5);
        assert_eq!(r.right(), 7);
        assert_eq!(r.bottom(), 7);
        // u64 edges never overflow u32 inputs
        let r = Region::new(u32::MAX, u32::MAX, u32::MAX, u32::MAX);
        assert_eq!(r.right(), u32::MAX as u64 * 2);
    }

    #[test]
    fn row_span_values() {
        let r = Region::new(4, 1, 4, 2);
        assert_eq!(r.row_span(8, 0), 12..16);
        assert_eq!(r.row_span(8, 1), 20..24);
    }

    #[test]
    #[should_panic(expected = "row index 2 out of bounds")]
    fn row_span_out_of_bounds() {
        let _ = Region::new(0, 0, 4, 2).row_span(8, 2);
    }

    // --- footprint ---

    #[test]
    fn min_buffer_len_basic() {
        // last row needs no trailing padding
        assert_eq!(Region::new(1, 0, 8, 1).min_buffer_len(8), Ok(9));
        assert_eq!(Region::new(4, 0, 4, 2).min_buffer_len(8), Ok(16));
        assert_eq!(Region::new(0, 2, 3, 3).min_buffer_len(10), Ok(43));
    }

    #[test]
    fn min_buffer_len_empty() {
        assert_eq!(Region::new(5, 5, 0, 0).min_buffer_len(8), Ok(0));
        assert_eq!(Region::new(0, 0, 4, 0).min_buffer_len(8), Ok(0));
    }

    #[test]
    fn min_buffer_len_overflow() {
        let r = Region::new(0, u32::MAX, 1, u32::MAX);
        assert_eq!(r.min_buffer_len(usize::MAX), Err(RegionError::Overflow));
    }

    // --- validation ---

    #[test]
    fn validate_ok() {
        assert_eq!(Region::new(4, 0, 4, 2).validate(8, 64), Ok(()));
        // exact footprint is enough
        assert_eq!(Region::new(1, 0, 8, 1).validate(8, 9), Ok(()));
    }

    #[test]
    fn validate_zero_width() {
        assert_eq!(
            Region::new(0, 0, 0, 4).validate(8, 64),
            Err(RegionError::ZeroWidth)
        );
        // fully empty region is fine, even against an empty buffer
        assert_eq!(Region::new(0, 0, 0, 0).validate(8, 0), Ok(()));
    }

    #[test]
    fn validate_pitch_overrun() {
        assert_eq!(
            Region::new(0, 0, 9, 1).validate(8, 64),
            Err(RegionError::PitchOverrun)
        );
        // x + width > pitch is allowed when width itself fits
        assert_eq!(Region::new(1, 0, 8, 1).validate(8, 9), Ok(()));
    }

    #[test]
    fn validate_insufficient_data() {
        assert_eq!(
            Region::new(1, 0, 8, 1).validate(8, 8),
            Err(RegionError::InsufficientData)
        );
        assert_eq!(
            Region::new(0, 7, 8, 2).validate(8, 64),
            Err(RegionError::InsufficientData)
        );
    }

    #[test]
    fn error_display() {
        assert_eq!(
            RegionError::ZeroWidth.to_string(),
            "region width is zero"
        );
        assert_eq!(
            RegionError::InsufficientData.to_string(),
            "buffer is too small for the region footprint"
        );
    }
}
