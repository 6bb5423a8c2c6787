//! Raster-order cursors and iterators over rectangular sub-regions of
//! pitched 2D buffers.
//!
//! A 2D image stored row-major in a flat slice often carries padding:
//! rows are `pitch` elements apart even when only `width` of them belong
//! to the window of interest. Walking a sub-rectangle of such a buffer
//! means advancing element by element within a row, then jumping the
//! `pitch - width` gap at each row boundary. This crate is that one
//! addressing primitive, exposed three ways:
//!
//! - [`Region`] — the geometry: `(x, y, width, height)` of the window,
//!   with span math and validation against a pitch and buffer length.
//! - [`RegionCursor`] — a detached `Copy` cursor holding a signed logical
//!   offset; maps it to a physical index via the pitch-correction
//!   formula, supports offset arithmetic, distance, and an in-range test,
//!   and binds to a borrowed slice through fallible `get`/`get_mut`.
//! - [`RegionIter`] / [`RegionIterMut`] — borrowing iterators over
//!   `&[T]` / `&mut [T]` for use with adapter chains (`zip`, `fold`,
//!   `for_each`, …), double-ended and exact-sized, with O(1) `nth`.
//!
//! Zero-copy [`From`] conversions build whole-image iterators from
//! `imgref`'s [`ImgRef`](imgref::ImgRef) / [`ImgRefMut`](imgref::ImgRefMut)
//! views at the image's own stride.
//!
//! ## Pitch
//!
//! The **pitch** (also called "stride") is the distance between the start
//! of one row and the start of the next, in elements of the slice's item
//! type. When `pitch == width` the buffer is contiguous; when
//! `pitch > width` the trailing gap is padding that iteration skips and
//! never reads or writes. The minimum buffer length for a region is
//! `(y + height - 1) * pitch + x + width` — the last row needs no
//! trailing padding.
//!
//! The crate owns no memory and allocates nothing; every operation is
//! O(1) apart from the iteration a caller drives.

#![no_std]
#![forbid(unsafe_code)]

#[cfg(test)]
extern crate alloc;

mod cursor;
mod iter;
mod region;

pub use cursor::RegionCursor;
pub use iter::{RegionIter, RegionIterMut};
pub use region::{Region, RegionError};
