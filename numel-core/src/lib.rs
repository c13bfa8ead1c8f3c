//! Numel counts the elements described by multi-dimensional shape descriptors.
//!
//! A [`Dims`] holds up to [`MAX_DIMS`] signed extents together with the number of axes in use,
//! and [`element_count`] multiplies those extents together. The count is deliberately permissive:
//! it never fails, wraps on overflow, and lets negative extents multiply through.
//! Callers that want validation use [`checked_element_count`] instead.
//!
//! Shapes known at compile time can be written with the [`Shape`] trait and the `R*` structs.
//!
//! ## A quick guide
//! - Build a [`Dims`] from an array, a slice, or with [`Dims::new`].
//! - Count its elements with [`element_count`], or [`element_count_of`] for a bare slice.
//! - Use [`checked_element_count`] to reject negative extents and overflowing products.
//!
//! ```
//! use numel_core::{checked_element_count, element_count, Dims, Shape, R3};
//!
//! let dims = Dims::from([2, 3, 4]);
//! assert_eq!(element_count(&dims), 24);
//! assert_eq!(R3::<2, 3, 4>::element_count(), 24);
//!
//! assert_eq!(element_count(&Dims::scalar()), 1);
//! assert!(checked_element_count(&Dims::from([-1, 4])).is_err());
//! ```

mod count;
mod dims;
mod error;
mod shape;

pub use count::{checked_element_count, element_count, element_count_of};
pub use dims::{Dims, MAX_DIMS};
pub use error::{Error, Result};
pub use shape::{Shape, R0, R1, R2, R3, R4, R5, R6};
