use crate::{error::DsuResult, union_find::check_capacity, UnionFind};

/// A union-find over `1..=N` whose table is stored inline.
pub type ConstDsu<const N: usize> = UnionFind<[isize; N]>;

impl<const N: usize> UnionFind<[isize; N]> {
  /// Builds `N` singleton sets. Fails if `N` is zero.
  pub fn new() -> DsuResult<Self> {
    check_capacity(N)?;
    Ok(Self::from_storage([-1; N]))
  }
}
