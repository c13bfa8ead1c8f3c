use crate::{element_count_of, Dims, Result};

/// A shape known at compile time.
pub trait Shape {
    fn shape() -> Vec<usize>;

    /// The shape as a runtime descriptor.
    ///
    /// Fails for ranks above [`MAX_DIMS`](crate::MAX_DIMS) or extents beyond `i64::MAX`.
    fn dims() -> Result<Dims> {
        Dims::try_from(Self::shape().as_slice())
    }

    fn element_count() -> u64 {
        element_count_of(&Self::shape().iter().map(|&n| n as i64).collect::<Vec<_>>())
    }
}

/// Zero-dimensional shape.
pub struct R0;

impl Shape for R0 {
    fn shape() -> Vec<usize> {
        vec![]
    }
}

macro_rules! shape {
    (($($C:ident),*), ($($N:tt),*), $name:ident) => {
        pub struct $name<$($C $N: usize, )*>;

        impl<$($C $N: usize, )*> Shape for $name<$({ $N }, )*> {
            fn shape() -> Vec<usize> {
                vec![$($N, )*]
            }
        }
    };
}

shape!((const), (A), R1);
shape!((const, const), (A, B), R2);
shape!((const, const, const), (A, B, C), R3);
shape!((const, const, const, const), (A, B, C, D), R4);
shape!((const, const, const, const, const), (A, B, C, D, E), R5);
shape!((const, const, const, const, const, const), (A, B, C, D, E, F), R6);
