use std::{error::Error, fmt::Display};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DsuErrorKind {
  InvalidArgument,
  OutOfRange,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DsuError {
  /// The universe size passed at construction was not a positive integer
  /// representable by the structure.
  InvalidArgument { message: String },
  /// An element id fell outside of `1..=n`.
  OutOfRange { index: usize, n: usize },
}

impl DsuError {
  pub fn kind(&self) -> DsuErrorKind {
    match self {
      Self::InvalidArgument { .. } => DsuErrorKind::InvalidArgument,
      Self::OutOfRange { .. } => DsuErrorKind::OutOfRange,
    }
  }
}

impl Error for DsuError {}

impl Display for DsuError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::InvalidArgument { message } => write!(f, "Error: invalid argument: {message}"),
      Self::OutOfRange { index, n } => {
        write!(f, "Error: element {index} is out of range [1, {n}]")
      }
    }
  }
}

#[macro_export]
macro_rules! make_invalid_argument {
  ($($args:expr),+) => {
    $crate::error::DsuError::InvalidArgument {
      message: format!($($args),+),
    }
  };
}

pub type DsuResult<T> = Result<T, DsuError>;
