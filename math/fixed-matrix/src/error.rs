use std::fmt;

/// Where a checked access tried to look.
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq)]
pub enum MatrixIndex {
  /// position in the linear `x + y * width` layout
  Linear(usize),
  /// column `x` of row `y`
  Grid { x: usize, y: usize },
}

impl fmt::Display for MatrixIndex {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      MatrixIndex::Linear(pos) => write!(f, "position {pos}"),
      MatrixIndex::Grid { x, y } => write!(f, "(x: {x}, y: {y})"),
    }
  }
}

#[derive(thiserror::Error, Debug, Copy, Clone, Hash, Eq, PartialEq)]
pub enum MatrixError {
  #[error("wrong number of elements given: matrix holds {expected}, got {actual}")]
  InvalidArgument { expected: usize, actual: usize },
  #[error("{0} is outside the matrix boundaries")]
  OutOfRange(MatrixIndex),
}

#[test]
fn error_messages() {
  let err = MatrixError::InvalidArgument {
    expected: 6,
    actual: 5,
  };
  assert_eq!(
    err.to_string(),
    "wrong number of elements given: matrix holds 6, got 5"
  );

  let err = MatrixError::OutOfRange(MatrixIndex::Grid { x: 2, y: 0 });
  assert_eq!(
    err.to_string(),
    "(x: 2, y: 0) is outside the matrix boundaries"
  );

  let err = MatrixError::OutOfRange(MatrixIndex::Linear(9));
  assert_eq!(err.to_string(), "position 9 is outside the matrix boundaries");
}
