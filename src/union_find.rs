use std::{
  fmt::{Debug, Display},
  ops::RangeInclusive,
};

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::error::{DsuError, DsuResult};

/// Backing table of a `UnionFind`. Any contiguous, mutable slice of `isize`
/// works.
pub trait Storage: AsRef<[isize]> + AsMut<[isize]> {}

impl<T: AsRef<[isize]> + AsMut<[isize]>> Storage for T {}

/// Disjoint-set forest over the elements `1..=n`, with path compression and
/// union by size.
#[derive(Clone)]
pub struct UnionFind<S> {
  unique_sets: usize,
  /// One entry per element (0-indexed). Roots hold the negated size of their
  /// set, every other element holds the 0-indexed id of its parent.
  parent_or_size: S,
}

/// A union-find whose universe size is chosen at runtime.
pub type Dsu = UnionFind<Vec<isize>>;

impl Dsu {
  /// Builds `n` singleton sets over `1..=n`. Fails if `n` is not a positive
  /// integer.
  pub fn new<N>(n: N) -> DsuResult<Self>
  where
    N: TryInto<usize> + Copy + Display,
  {
    let capacity = n.try_into().map_err(|_| {
      debug!(%n, "rejected universe size");
      crate::make_invalid_argument!("universe size must be a positive integer, got {}", n)
    })?;
    check_capacity(capacity)?;

    Ok(Self::from_storage(vec![-1; capacity]))
  }
}

pub(crate) fn check_capacity(capacity: usize) -> DsuResult<()> {
  if capacity == 0 || capacity > isize::MAX as usize {
    debug!(capacity, "rejected universe size");
    return Err(crate::make_invalid_argument!(
      "universe size must be a positive integer, got {}",
      capacity
    ));
  }
  Ok(())
}

impl<S: Storage> UnionFind<S> {
  /// Wraps a table in which every entry is already -1.
  pub(crate) fn from_storage(parent_or_size: S) -> Self {
    let unique_sets = parent_or_size.as_ref().len();
    debug_assert!(parent_or_size.as_ref().iter().all(|&entry| entry == -1));
    debug!(n = unique_sets, "constructed union-find");

    Self {
      unique_sets,
      parent_or_size,
    }
  }

  fn table(&self) -> &[isize] {
    self.parent_or_size.as_ref()
  }

  fn table_mut(&mut self) -> &mut [isize] {
    self.parent_or_size.as_mut()
  }

  /// The size of the universe, `n`.
  pub fn capacity(&self) -> usize {
    self.table().len()
  }

  /// The number of disjoint sets currently in the structure.
  pub fn unique_sets(&self) -> usize {
    self.unique_sets
  }

  /// All valid element ids, `1..=n`.
  pub fn elements(&self) -> RangeInclusive<usize> {
    1..=self.capacity()
  }

  /// Translates an external element id into a table index.
  fn node_id(&self, element: usize) -> DsuResult<usize> {
    if self.elements().contains(&element) {
      Ok(element - 1)
    } else {
      debug!(element, n = self.capacity(), "element out of range");
      Err(DsuError::OutOfRange {
        index: element,
        n: self.capacity(),
      })
    }
  }

  fn root_size(&self, root_id: usize) -> usize {
    debug_assert!(self.table()[root_id] < 0);
    self.table()[root_id].unsigned_abs()
  }

  /// Gives the table index of the root of the tree that `node_id` is in,
  /// pointing every node on the way directly at that root.
  fn find_root(&mut self, node_id: usize) -> usize {
    let mut root_id = node_id;
    while let Ok(parent_id) = usize::try_from(self.table()[root_id]) {
      root_id = parent_id;
    }

    let mut node_id = node_id;
    while node_id != root_id {
      let parent_id = self.table()[node_id] as usize;
      self.table_mut()[node_id] = root_id as isize;
      node_id = parent_id;
    }

    root_id
  }

  /// Returns the leader of the set containing `a`.
  pub fn leader(&mut self, a: usize) -> DsuResult<usize> {
    let a_id = self.node_id(a)?;
    Ok(self.find_root(a_id) + 1)
  }

  /// Unions the sets that `a` and `b` are in (noop if they are already in the
  /// same set), returning the leader of the combined set.
  ///
  /// The smaller set is attached under the leader of the larger one. On a
  /// tie, `a`'s leader survives.
  pub fn merge(&mut self, a: usize, b: usize) -> DsuResult<usize> {
    let a_id = self.node_id(a)?;
    let b_id = self.node_id(b)?;

    let a_root_id = self.find_root(a_id);
    let b_root_id = self.find_root(b_id);
    if a_root_id == b_root_id {
      trace!(a, b, leader = a_root_id + 1, "already in the same set");
      return Ok(a_root_id + 1);
    }

    let a_size = self.root_size(a_root_id);
    let b_size = self.root_size(b_root_id);
    let (root_id, child_id) = if a_size < b_size {
      (b_root_id, a_root_id)
    } else {
      (a_root_id, b_root_id)
    };

    let size = a_size + b_size;
    let table = self.table_mut();
    table[root_id] = -(size as isize);
    table[child_id] = root_id as isize;

    // Two sets have joined, reducing the number of unique sets by one.
    self.unique_sets -= 1;

    trace!(
      a,
      b,
      leader = root_id + 1,
      absorbed = child_id + 1,
      size,
      "merged sets"
    );
    Ok(root_id + 1)
  }

  /// True if `a` and `b` share a leader.
  pub fn same(&mut self, a: usize, b: usize) -> DsuResult<bool> {
    let a_id = self.node_id(a)?;
    let b_id = self.node_id(b)?;
    Ok(self.find_root(a_id) == self.find_root(b_id))
  }

  /// The number of elements in the set containing `a`.
  pub fn size(&mut self, a: usize) -> DsuResult<usize> {
    let a_id = self.node_id(a)?;
    let root_id = self.find_root(a_id);
    Ok(self.root_size(root_id))
  }

  /// Leaders of every set, in ascending order. Does not compress paths.
  pub fn leaders(&self) -> Vec<usize> {
    self
      .table()
      .iter()
      .enumerate()
      .filter_map(|(node_id, &entry)| (entry < 0).then_some(node_id + 1))
      .collect()
  }

  /// Maps each leader to the members of its set.
  ///
  /// Members are listed in ascending order, and groups appear in the order
  /// of their smallest member.
  pub fn groups(&mut self) -> IndexMap<usize, Vec<usize>> {
    let mut groups = IndexMap::<usize, Vec<usize>>::with_capacity(self.unique_sets);
    for node_id in 0..self.capacity() {
      let root_id = self.find_root(node_id);
      groups.entry(root_id + 1).or_default().push(node_id + 1);
    }
    groups
  }
}

impl<S: AsRef<[isize]>> Debug for UnionFind<S> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let table = self.parent_or_size.as_ref();
    f.debug_struct("UnionFind")
      .field("n", &table.len())
      .field("unique_sets", &self.unique_sets)
      .field(
        "parent_or_size",
        &table
          .iter()
          .map(|&entry| if entry < 0 { entry } else { entry + 1 })
          .collect::<Vec<_>>(),
      )
      .finish()
  }
}
