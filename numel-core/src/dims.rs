use std::{
    fmt::{self, Display},
    hash::{Hash, Hasher},
    ops::Index,
};

use crate::{bail, Error, Result};

/// Maximum number of axes a [`Dims`] can hold.
pub const MAX_DIMS: usize = 8;

/// A fixed-capacity shape descriptor: up to [`MAX_DIMS`] signed extents plus
/// the number of axes in use.
///
/// Extents are not validated. Negative values are stored as given and only
/// rejected by [`checked_element_count`](crate::checked_element_count).
#[derive(Clone, Copy, Debug)]
pub struct Dims {
    nb_dims: usize,
    d: [i64; MAX_DIMS],
}

impl Dims {
    /// Build a descriptor from the given extents.
    ///
    /// Fails if there are more than [`MAX_DIMS`] extents.
    pub fn new(extents: &[i64]) -> Result<Self> {
        if extents.len() > MAX_DIMS {
            bail!(Error::RankTooLarge {
                rank: extents.len(),
                max: MAX_DIMS,
            });
        }
        let mut d = [0; MAX_DIMS];
        d[..extents.len()].copy_from_slice(extents);
        Ok(Self {
            nb_dims: extents.len(),
            d,
        })
    }

    /// A zero-dimensional descriptor.
    pub const fn scalar() -> Self {
        Self {
            nb_dims: 0,
            d: [0; MAX_DIMS],
        }
    }

    pub fn nb_dims(&self) -> usize {
        self.nb_dims
    }

    pub fn is_scalar(&self) -> bool {
        self.nb_dims == 0
    }

    /// The extents in use.
    pub fn as_slice(&self) -> &[i64] {
        &self.d[..self.nb_dims]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, i64> {
        self.as_slice().iter()
    }
}

impl Default for Dims {
    fn default() -> Self {
        Self::scalar()
    }
}

impl PartialEq for Dims {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for Dims {}

impl Hash for Dims {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl Index<usize> for Dims {
    type Output = i64;

    fn index(&self, axis: usize) -> &i64 {
        &self.as_slice()[axis]
    }
}

impl<'a> IntoIterator for &'a Dims {
    type Item = &'a i64;
    type IntoIter = std::slice::Iter<'a, i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, extent) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{extent}")?;
        }
        if self.nb_dims == 1 {
            write!(f, ",")?;
        }
        write!(f, ")")
    }
}

macro_rules! dims_from_array {
    ($($N:literal),*) => {
        $(
            impl From<[i64; $N]> for Dims {
                fn from(extents: [i64; $N]) -> Self {
                    let mut d = [0; MAX_DIMS];
                    d[..$N].copy_from_slice(&extents);
                    Self { nb_dims: $N, d }
                }
            }
        )*
    };
}

dims_from_array!(0, 1, 2, 3, 4, 5, 6, 7, 8);

impl TryFrom<&[i64]> for Dims {
    type Error = Error;

    fn try_from(extents: &[i64]) -> Result<Self> {
        Self::new(extents)
    }
}

impl TryFrom<&[usize]> for Dims {
    type Error = Error;

    fn try_from(extents: &[usize]) -> Result<Self> {
        if extents.len() > MAX_DIMS {
            bail!(Error::RankTooLarge {
                rank: extents.len(),
                max: MAX_DIMS,
            });
        }
        let mut d = [0; MAX_DIMS];
        for (axis, (slot, &extent)) in d.iter_mut().zip(extents).enumerate() {
            *slot = i64::try_from(extent)
                .map_err(|_| Error::ExtentOutOfRange { axis, extent }.bt())?;
        }
        Ok(Self {
            nb_dims: extents.len(),
            d,
        })
    }
}
