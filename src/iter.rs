//! Borrowing raster iterators over pitched sub-regions.
//!
//! [`RegionIter`] and [`RegionIterMut`] walk a [`Region`] of a borrowed
//! slice in raster order, skipping the pitch gap at the end of each row.
//! They are the `Iterator`-conformant carrier for the addressing math in
//! [`RegionCursor`](crate::RegionCursor): for every logical offset the
//! element they yield sits at exactly the cursor's `position()`.
//!
//! Stepping is incremental — a column counter and a gap skip at row ends,
//! no division per element. Random access (`nth`) and the reverse
//! direction reuse the same row/gap arithmetic.

use core::fmt;
use core::iter::FusedIterator;
use core::mem;

use imgref::{ImgRef, ImgRefMut};

use crate::region::{Region, RegionError};

// ---------------------------------------------------------------------------
// RegionIter (shared)
// ---------------------------------------------------------------------------

/// Raster-order iterator over a sub-region of a borrowed slice.
///
/// Yields `&T` left-to-right, top-to-bottom. Cloning is cheap and
/// independent: advancing a clone never moves the original.
///
/// # Example
///
/// ```
/// use zenregion::{Region, RegionIter};
///
/// let data: Vec<u16> = (0..32).collect();
/// let it = RegionIter::new(&data, 8, Region::new(2, 1, 3, 2)).unwrap();
/// let vals: Vec<u16> = it.copied().collect();
/// assert_eq!(vals, [10, 11, 12, 18, 19, 20]);
/// ```
pub struct RegionIter<'a, T> {
    /// Physical window from the next front element through the last
    /// unyielded element; both ends shrink as the iterator advances.
    data: &'a [T],
    region: Region,
    front_col: usize,
    back_col: usize,
    remaining: usize,
    /// `pitch - width`, the elements skipped at each row boundary.
    gap: usize,
}

impl<'a, T> RegionIter<'a, T> {
    /// Iterator over `region` within `data`, whose rows are `pitch`
    /// elements apart. An empty region yields nothing.
    ///
    /// # Errors
    ///
    /// Returns the [`Region::validate`] error if the geometry is invalid
    /// or `data` is shorter than the region's footprint.
    pub fn new(data: &'a [T], pitch: usize, region: Region) -> Result<Self, RegionError> {
        region.validate(pitch, data.len())?;
        let len = region.len();
        if len == 0 {
            return Ok(Self::empty(region));
        }
        let width = region.width as usize;
        let base = region.y as usize * pitch + region.x as usize;
        let end = base + (region.height as usize - 1) * pitch + width;
        Ok(Self {
            data: &data[base..end],
            region,
            front_col: 0,
            back_col: width - 1,
            remaining: len,
            gap: pitch - width,
        })
    }

    /// The region being walked.
    #[inline]
    pub fn region(&self) -> Region {
        self.region
    }

    fn empty(region: Region) -> Self {
        Self {
            data: &[],
            region,
            front_col: 0,
            back_col: 0,
            remaining: 0,
            gap: 0,
        }
    }
}

impl<'a, T> Iterator for RegionIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let data = self.data;
        let (item, rest) = data.split_first()?;
        self.remaining -= 1;
        if self.remaining > 0 {
            if self.front_col + 1 == self.region.width as usize {
                self.front_col = 0;
                self.data = &rest[self.gap..];
            } else {
                self.front_col += 1;
                self.data = rest;
            }
        }
        Some(item)
    }

    fn nth(&mut self, n: usize) -> Option<&'a T> {
        if n >= self.remaining {
            self.remaining = 0;
            self.data = &[];
            return None;
        }
        if n > 0 {
            let width = self.region.width as usize;
            let data = self.data;
            let col = self.front_col + n;
            self.data = &data[n + (col / width) * self.gap..];
            self.front_col = col % width;
            self.remaining -= n;
        }
        self.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }

    #[inline]
    fn count(self) -> usize {
        self.remaining
    }

    fn last(self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let data = self.data;
        data.last()
    }
}

impl<'a, T> DoubleEndedIterator for RegionIter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let data = self.data;
        let (item, rest) = data.split_last()?;
        self.remaining -= 1;
        if self.remaining > 0 {
            if self.back_col == 0 {
                self.back_col = self.region.width as usize - 1;
                self.data = &rest[..rest.len() - self.gap];
            } else {
                self.back_col -= 1;
                self.data = rest;
            }
        }
        Some(item)
    }
}

impl<T> ExactSizeIterator for RegionIter<'_, T> {}
impl<T> FusedIterator for RegionIter<'_, T> {}

// manual impl: cloning the view never requires T: Clone
impl<T> Clone for RegionIter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data,
            region: self.region,
            front_col: self.front_col,
            back_col: self.back_col,
            remaining: self.remaining,
            gap: self.gap,
        }
    }
}

impl<T> fmt::Debug for RegionIter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RegionIter({}x{} at ({}, {}), {} remaining)",
            self.region.width, self.region.height, self.region.x, self.region.y, self.remaining
        )
    }
}

/// Whole-image iterator at the image's own stride; zero-copy.
///
/// Degenerate images (zero width or height, or dimensions beyond `u32`)
/// become empty iterators.
impl<'a, T> From<ImgRef<'a, T>> for RegionIter<'a, T> {
    fn from(img: ImgRef<'a, T>) -> Self {
        let (Ok(w), Ok(h)) = (u32::try_from(img.width()), u32::try_from(img.height())) else {
            return Self::empty(Region::new(0, 0, 0, 0));
        };
        let region = Region::new(0, 0, w, h);
        Self::new(*img.buf(), img.stride(), region).unwrap_or_else(|_| Self::empty(region))
    }
}

// ---------------------------------------------------------------------------
// RegionIterMut (mutable)
// ---------------------------------------------------------------------------

/// Raster-order iterator yielding `&mut T` over a sub-region of a
/// borrowed mutable slice.
///
/// Each yielded reference is disjoint from every other, carved off the
/// front or back of the remaining window by slice splitting.
pub struct RegionIterMut<'a, T> {
    /// Physical window from the next front element through the last
    /// unyielded element.
    data: &'a mut [T],
    region: Region,
    front_col: usize,
    back_col: usize,
    remaining: usize,
    gap: usize,
}

impl<'a, T> RegionIterMut<'a, T> {
    /// Mutable iterator over `region` within `data`, whose rows are
    /// `pitch` elements apart. An empty region yields nothing.
    ///
    /// # Errors
    ///
    /// Returns the [`Region::validate`] error if the geometry is invalid
    /// or `data` is shorter than the region's footprint.
    pub fn new(data: &'a mut [T], pitch: usize, region: Region) -> Result<Self, RegionError> {
        region.validate(pitch, data.len())?;
        let len = region.len();
        if len == 0 {
            return Ok(Self::empty(region));
        }
        let width = region.width as usize;
        let base = region.y as usize * pitch + region.x as usize;
        let end = base + (region.height as usize - 1) * pitch + width;
        Ok(Self {
            data: &mut data[base..end],
            region,
            front_col: 0,
            back_col: width - 1,
            remaining: len,
            gap: pitch - width,
        })
    }

    /// The region being walked.
    #[inline]
    pub fn region(&self) -> Region {
        self.region
    }

    fn empty(region: Region) -> Self {
        Self {
            data: &mut [],
            region,
            front_col: 0,
            back_col: 0,
            remaining: 0,
            gap: 0,
        }
    }
}

impl<'a, T> Iterator for RegionIterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        if self.remaining == 0 {
            return None;
        }
        let data = mem::take(&mut self.data);
        let (item, rest) = data.split_first_mut()?;
        self.remaining -= 1;
        if self.remaining > 0 {
            if self.front_col + 1 == self.region.width as usize {
                self.front_col = 0;
                let (_, tail) = rest.split_at_mut(self.gap);
                self.data = tail;
            } else {
                self.front_col += 1;
                self.data = rest;
            }
        }
        Some(item)
    }

    fn nth(&mut self, n: usize) -> Option<&'a mut T> {
        if n >= self.remaining {
            self.remaining = 0;
            self.data = &mut [];
            return None;
        }
        if n > 0 {
            let width = self.region.width as usize;
            let data = mem::take(&mut self.data);
            let col = self.front_col + n;
            let (_, tail) = data.split_at_mut(n + (col / width) * self.gap);
            self.data = tail;
            self.front_col = col % width;
            self.remaining -= n;
        }
        self.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }

    #[inline]
    fn count(self) -> usize {
        self.remaining
    }

    fn last(self) -> Option<&'a mut T> {
        if self.remaining == 0 {
            return None;
        }
        let data = self.data;
        data.last_mut()
    }
}

impl<'a, T> DoubleEndedIterator for RegionIterMut<'a, T> {
    fn next_back(&mut self) -> Option<&'a mut T> {
        if self.remaining == 0 {
            return None;
        }
        let data = mem::take(&mut self.data);
        let (item, rest) = data.split_last_mut()?;
        self.remaining -= 1;
        if self.remaining > 0 {
            if self.back_col == 0 {
                self.back_col = self.region.width as usize - 1;
                let keep = rest.len() - self.gap;
                let (head, _) = rest.split_at_mut(keep);
                self.data = head;
            } else {
                self.back_col -= 1;
                self.data = rest;
            }
        }
        Some(item)
    }
}

impl<T> ExactSizeIterator for RegionIterMut<'_, T> {}
impl<T> FusedIterator for RegionIterMut<'_, T> {}

impl<T> fmt::Debug for RegionIterMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RegionIterMut({}x{} at ({}, {}), {} remaining)",
            self.region.width, self.region.height, self.region.x, self.region.y, self.remaining
        )
    }
}

/// Whole-image mutable iterator at the image's own stride; zero-copy.
///
/// Degenerate images (zero width or height, or dimensions beyond `u32`)
/// become empty iterators.
impl<'a, T> From<ImgRefMut<'a, T>> for RegionIterMut<'a, T> {
    fn from(img: ImgRefMut<'a, T>) -> Self {
        let (Ok(w), Ok(h)) = (u32::try_from(img.width()), u32::try_from(img.height())) else {
            return Self::empty(Region::new(0, 0, 0, 0));
        };
        let region = Region::new(0, 0, w, h);
        let stride = img.stride();
        let buf = img.into_buf();
        Self::new(buf, stride, region).unwrap_or_else(|_| Self::empty(region))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
