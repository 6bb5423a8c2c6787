//! Detached random-access cursor over a pitched sub-region.
//!
//! [`RegionCursor`] is the addressing core of the crate: a small `Copy`
//! value that maps a signed logical offset within a sub-region to the
//! physical element index inside the enclosing buffer. It never holds a
//! reference to the buffer; [`get`](RegionCursor::get) and
//! [`get_mut`](RegionCursor::get_mut) bind it to a borrowed slice at the
//! point of access.

use core::ops::{Add, AddAssign, Sub, SubAssign};

use crate::region::{Region, RegionError};

/// Random-access cursor over a rectangular sub-region of a pitched buffer.
///
/// The cursor's only mutable state is a signed logical `offset`, counted
/// in elements along the sub-region's own raster order: 0 at the top-left
/// element, `width * height` at the one-past-the-end sentinel. Everything
/// else (`base`, `limit`, `width`, `pitch`) is fixed at construction, and
/// copies share values, not identity — advancing a copy never moves the
/// original.
///
/// Equality compares every field, not just the logical position. Two
/// cursors at the same offset over different pitches are unequal, which
/// lets loop-termination checks catch mixed-region sentinels.
///
/// Offset arithmetic is provided through the standard operators:
/// `cursor + n` and `cursor - n` (`n: isize`) copy-then-adjust, `+=` and
/// `-=` mutate in place, and `a - b` is the signed distance between two
/// cursors. Distance looks only at the offsets; subtracting cursors from
/// different regions is not detected.
///
/// # Example
///
/// ```
/// use zenregion::{Region, RegionCursor};
///
/// let mut data = vec![0u8; 64];
/// let mut c = RegionCursor::new(8, Region::new(4, 0, 4, 2)).unwrap();
/// while c.in_range() {
///     *c.get_mut(&mut data).unwrap() = 1;
///     c += 1;
/// }
/// assert_eq!(&data[4..8], &[1, 1, 1, 1]);
/// assert_eq!(&data[12..16], &[1, 1, 1, 1]);
/// assert_eq!(data.iter().filter(|&&b| b == 1).count(), 8);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RegionCursor {
    /// Physical index of the region's first element.
    base: usize,
    /// `base + width * height`; the end sentinel in logical element counts.
    limit: usize,
    /// Logical raster-order offset; the only field iteration changes.
    offset: isize,
    width: usize,
    pitch: usize,
}

impl RegionCursor {
    /// Cursor over `region` in a buffer of the given pitch, with the
    /// buffer origin at index 0.
    ///
    /// # Errors
    ///
    /// See [`with_origin`](Self::with_origin).
    pub fn new(pitch: usize, region: Region) -> Result<Self, RegionError> {
        Self::with_origin(0, pitch, region)
    }

    /// Cursor over `region` in a buffer whose first element sits at
    /// physical index `origin`. Computes `base = origin + pitch * y + x`
    /// and `limit = base + width * height`; the offset starts at 0.
    ///
    /// Validation is geometry-only: no buffer is in sight here, so the
    /// footprint is checked against the buffer at each
    /// [`get`](Self::get)/[`get_mut`](Self::get_mut) instead.
    ///
    /// # Errors
    ///
    /// - [`RegionError::ZeroWidth`] — `width == 0`; the address formula
    ///   divides by width, so a cursor cannot cover a zero-width region
    ///   even when it is empty.
    /// - [`RegionError::PitchOverrun`] — `width > pitch`.
    /// - [`RegionError::Overflow`] — `base`, `limit`, or `pitch` does not
    ///   fit the signed index range the offset math runs in.
    pub fn with_origin(origin: usize, pitch: usize, region: Region) -> Result<Self, RegionError> {
        if region.width == 0 {
            return Err(RegionError::ZeroWidth);
        }
        let width = region.width as usize;
        if width > pitch {
            return Err(RegionError::PitchOverrun);
        }
        let row = (region.y as usize)
            .checked_mul(pitch)
            .ok_or(RegionError::Overflow)?;
        let base = origin
            .checked_add(row)
            .and_then(|b| b.checked_add(region.x as usize))
            .ok_or(RegionError::Overflow)?;
        let limit = width
            .checked_mul(region.height as usize)
            .and_then(|len| base.checked_add(len))
            .ok_or(RegionError::Overflow)?;
        if limit > isize::MAX as usize || pitch > isize::MAX as usize {
            return Err(RegionError::Overflow);
        }
        Ok(Self {
            base,
            limit,
            offset: 0,
            width,
            pitch,
        })
    }

    /// Copy of this cursor positioned at the one-past-the-end sentinel
    /// (`offset = width * height`). Derives purely from `base` and
    /// `limit`, so it is correct regardless of the current offset.
    #[inline]
    pub fn end(&self) -> Self {
        Self {
            offset: (self.limit - self.base) as isize,
            ..*self
        }
    }

    /// Physical element index for the current logical offset.
    ///
    /// Advancing the offset by `width` logical elements must advance the
    /// physical index by `pitch`, so the flat `base + offset` is corrected
    /// by the pitch gap once per row crossed:
    ///
    /// ```text
    /// rows  = offset / width          (truncating toward zero)
    /// index = base + offset + rows * (pitch - width)
    /// ```
    ///
    /// The division truncates toward zero for negative offsets as well;
    /// a cursor driven below zero addresses positions before `base`
    /// without snapping to a row boundary. Such positions are outside
    /// [`in_range`](Self::in_range) and exist only as defined arithmetic.
    ///
    /// # Panics
    ///
    /// Panics if the index would land before the start of the buffer
    /// (a negative physical index has no `usize` form).
    #[inline]
    pub fn position(&self) -> usize {
        let rows = self.offset / self.width as isize;
        let gap = (self.pitch - self.width) as isize;
        let index = self.base as isize + self.offset + rows * gap;
        assert!(
            index >= 0,
            "offset {} addresses before the start of the buffer",
            self.offset
        );
        index as usize
    }

    /// Whether the cursor points at an element of the region:
    /// `0 <= offset < width * height`.
    #[inline]
    pub fn in_range(&self) -> bool {
        self.offset >= 0 && self.offset < (self.limit - self.base) as isize
    }

    /// Element at the current position, or `None` when the cursor is out
    /// of range or the position falls beyond `data`.
    #[inline]
    pub fn get<'a, T>(&self, data: &'a [T]) -> Option<&'a T> {
        if !self.in_range() {
            return None;
        }
        data.get(self.position())
    }

    /// Mutable element at the current position, or `None` when the cursor
    /// is out of range or the position falls beyond `data`.
    #[inline]
    pub fn get_mut<'a, T>(&self, data: &'a mut [T]) -> Option<&'a mut T> {
        if !self.in_range() {
            return None;
        }
        data.get_mut(self.position())
    }

    /// Current logical offset.
    #[inline]
    pub fn offset(&self) -> isize {
        self.offset
    }

    /// Region size in elements, `width * height`.
    #[inline]
    pub fn len(&self) -> usize {
        self.limit - self.base
    }

    /// Whether the region covers no elements (zero height).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.limit == self.base
    }

    /// Signed count of elements left before the end sentinel; negative
    /// once the offset has been driven past it.
    #[inline]
    pub fn remaining(&self) -> isize {
        (self.limit - self.base) as isize - self.offset
    }

    /// Region row length, in elements.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Enclosing buffer row length, in elements.
    #[inline]
    pub fn pitch(&self) -> usize {
        self.pitch
    }

    /// Physical index of the region's first element.
    #[inline]
    pub fn base(&self) -> usize {
        self.base
    }

    /// `base + width * height`.
    #[inline]
    pub fn limit(&self) -> usize {
        self.limit
    }
}

impl Add<isize> for RegionCursor {
    type Output = Self;

    #[inline]
    fn add(mut self, delta: isize) -> Self {
        self.offset += delta;
        self
    }
}

impl Sub<isize> for RegionCursor {
    type Output = Self;

    #[inline]
    fn sub(mut self, delta: isize) -> Self {
        self.offset -= delta;
        self
    }
}

impl AddAssign<isize> for RegionCursor {
    #[inline]
    fn add_assign(&mut self, delta: isize) {
        self.offset += delta;
    }
}

impl SubAssign<isize> for RegionCursor {
    #[inline]
    fn sub_assign(&mut self, delta: isize) {
        self.offset -= delta;
    }
}

/// Signed distance between two cursors, `self.offset() - rhs.offset()`.
///
/// Only the offsets are compared; both cursors must come from the same
/// region for the result to mean anything, and no check is performed.
impl Sub for RegionCursor {
    type Output = isize;

    #[inline]
    fn sub(self, rhs: Self) -> isize {
        self.offset - rhs.offset
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
