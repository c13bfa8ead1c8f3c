use crate::{bail, Dims, Error, Result};

/// Number of elements described by `dims`: the product of its extents.
///
/// A zero-dimensional descriptor holds one element. No validation is done.
/// Each extent is reinterpreted as `u64` and multiplied with wrapping
/// arithmetic, so overflow wraps modulo 2^64 and negative extents multiply
/// through; casting the result back to `i64` recovers the signed product.
///
/// ```
/// use numel_core::{element_count, Dims};
///
/// assert_eq!(element_count(&Dims::from([2, 3, 4])), 24);
/// assert_eq!(element_count(&Dims::scalar()), 1);
/// assert_eq!(element_count(&Dims::from([-1, 3])) as i64, -3);
/// ```
#[inline]
pub fn element_count(dims: &Dims) -> u64 {
    element_count_of(dims.as_slice())
}

/// [`element_count`] over a bare slice of extents, of any length.
#[inline]
pub fn element_count_of(extents: &[i64]) -> u64 {
    extents
        .iter()
        .fold(1u64, |acc, &extent| acc.wrapping_mul(extent as u64))
}

/// Like [`element_count`], but rejects negative extents and products that
/// do not fit in `u64`.
pub fn checked_element_count(dims: &Dims) -> Result<u64> {
    if let Some((axis, &extent)) = dims.iter().enumerate().find(|(_, e)| **e < 0) {
        tracing::debug!("Rejecting {dims}: negative extent {extent} on axis {axis}");
        bail!(Error::NegativeExtent { axis, extent });
    }
    if dims.iter().any(|&extent| extent == 0) {
        return Ok(0);
    }
    match dims
        .iter()
        .try_fold(1u64, |acc, &extent| acc.checked_mul(extent as u64))
    {
        Some(count) => Ok(count),
        None => {
            tracing::debug!("Rejecting {dims}: element count overflows u64");
            bail!(Error::Overflow { dims: *dims })
        }
    }
}
