use std::{array, iter::Flatten, ops::*, slice};

use crate::*;

/// A dense matrix of `W` columns and `H` rows, stored inline.
///
/// Elements are laid out linearly, `(x, y)` lives at `x + y * W`. The storage is
/// `H` rows of `W` elements, so [`FixedMatrix::as_slice`] exposes exactly that
/// order without copying.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq)]
pub struct FixedMatrix<T, const W: usize, const H: usize> {
  rows: [[T; W]; H],
}

unsafe impl<T: bytemuck::Zeroable, const W: usize, const H: usize> bytemuck::Zeroable
  for FixedMatrix<T, W, H>
{
}
unsafe impl<T: bytemuck::Pod, const W: usize, const H: usize> bytemuck::Pod
  for FixedMatrix<T, W, H>
{
}

impl<T, const W: usize, const H: usize> FixedMatrix<T, W, H> {
  pub const WIDTH: usize = W;
  pub const HEIGHT: usize = H;
  pub const SIZE: usize = W * H;

  /// Build every element from its column `x` and row `y`.
  pub fn from_fn(mut f: impl FnMut(usize, usize) -> T) -> Self {
    Self {
      rows: array::from_fn(|y| array::from_fn(|x| f(x, y))),
    }
  }

  pub const fn from_rows(rows: [[T; W]; H]) -> Self {
    Self { rows }
  }

  pub fn into_rows(self) -> [[T; W]; H] {
    self.rows
  }

  pub fn as_rows(&self) -> &[[T; W]; H] {
    &self.rows
  }

  #[inline]
  pub const fn size(&self) -> usize {
    Self::SIZE
  }

  #[inline]
  pub const fn width(&self) -> usize {
    W
  }

  #[inline]
  pub const fn height(&self) -> usize {
    H
  }

  /// The elements in linear order.
  pub fn as_slice(&self) -> &[T] {
    self.rows.as_flattened()
  }

  pub fn as_mut_slice(&mut self) -> &mut [T] {
    self.rows.as_flattened_mut()
  }

  pub fn iter(&self) -> slice::Iter<'_, T> {
    self.as_slice().iter()
  }

  pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
    self.as_mut_slice().iter_mut()
  }

  /// Bounds checked access by linear position.
  pub fn at(&self, pos: usize) -> Result<&T, MatrixError> {
    self
      .as_slice()
      .get(pos)
      .ok_or(MatrixError::OutOfRange(MatrixIndex::Linear(pos)))
  }

  pub fn at_mut(&mut self, pos: usize) -> Result<&mut T, MatrixError> {
    self
      .as_mut_slice()
      .get_mut(pos)
      .ok_or(MatrixError::OutOfRange(MatrixIndex::Linear(pos)))
  }

  /// Bounds checked access by column `x` and row `y`.
  pub fn at_xy(&self, x: usize, y: usize) -> Result<&T, MatrixError> {
    if x >= W || y >= H {
      return Err(MatrixError::OutOfRange(MatrixIndex::Grid { x, y }));
    }
    Ok(&self.rows[y][x])
  }

  pub fn at_xy_mut(&mut self, x: usize, y: usize) -> Result<&mut T, MatrixError> {
    if x >= W || y >= H {
      return Err(MatrixError::OutOfRange(MatrixIndex::Grid { x, y }));
    }
    Ok(&mut self.rows[y][x])
  }

  pub fn swap(&mut self, other: &mut Self) {
    std::mem::swap(self, other)
  }

  #[must_use]
  pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> FixedMatrix<U, W, H> {
    FixedMatrix {
      rows: self.rows.map(|row| row.map(&mut f)),
    }
  }

  #[must_use]
  pub fn transpose(&self) -> FixedMatrix<T, H, W>
  where
    T: Clone,
  {
    FixedMatrix::from_fn(|x, y| self.rows[x][y].clone())
  }
}

impl<T: Clone, const W: usize, const H: usize> FixedMatrix<T, W, H> {
  /// Every element is a copy of `value`.
  pub fn splat(value: T) -> Self {
    Self::from_fn(|_, _| value.clone())
  }

  /// Build from exactly `W * H` elements given in linear order.
  pub fn try_from_slice(elements: &[T]) -> Result<Self, MatrixError> {
    if elements.len() != Self::SIZE {
      return Err(MatrixError::InvalidArgument {
        expected: Self::SIZE,
        actual: elements.len(),
      });
    }
    Ok(Self::from_fn(|x, y| elements[x + y * W].clone()))
  }

  /// Replace the whole content with `elements`, leaving `self` untouched when
  /// the element count is wrong.
  pub fn assign(&mut self, elements: &[T]) -> Result<(), MatrixError> {
    *self = Self::try_from_slice(elements)?;
    Ok(())
  }
}

impl<T: Default, const W: usize, const H: usize> FixedMatrix<T, W, H> {
  /// Fill the matrix in linear order from `elements`.
  ///
  /// The caller is expected to supply at least `W * H` elements, anything after
  /// that is left unconsumed. A short sequence leaves the tail at `T::default()`.
  pub fn from_elements(elements: impl IntoIterator<Item = T>) -> Self {
    let mut matrix = Self::default();
    let mut filled = 0;
    for (slot, value) in matrix.iter_mut().zip(elements) {
      *slot = value;
      filled += 1;
    }
    if filled < Self::SIZE {
      log::warn!(
        "{}x{} matrix built from only {} of {} elements, the rest stay default",
        W,
        H,
        filled,
        Self::SIZE
      );
    }
    matrix
  }
}

impl<T: Default, const W: usize, const H: usize> Default for FixedMatrix<T, W, H> {
  fn default() -> Self {
    Self::from_fn(|_, _| T::default())
  }
}

impl<T: Default, const W: usize, const H: usize> FromIterator<T> for FixedMatrix<T, W, H> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    Self::from_elements(iter)
  }
}

impl<T, const W: usize, const H: usize> From<[[T; W]; H]> for FixedMatrix<T, W, H> {
  fn from(rows: [[T; W]; H]) -> Self {
    Self::from_rows(rows)
  }
}

impl<T, const W: usize, const H: usize> From<FixedMatrix<T, W, H>> for [[T; W]; H] {
  fn from(m: FixedMatrix<T, W, H>) -> Self {
    m.rows
  }
}

impl<T: Clone, const W: usize, const H: usize> TryFrom<&[T]> for FixedMatrix<T, W, H> {
  type Error = MatrixError;

  fn try_from(elements: &[T]) -> Result<Self, Self::Error> {
    Self::try_from_slice(elements)
  }
}

impl<T: Default, const W: usize, const H: usize> TryFrom<Vec<T>> for FixedMatrix<T, W, H> {
  type Error = MatrixError;

  fn try_from(elements: Vec<T>) -> Result<Self, Self::Error> {
    if elements.len() != Self::SIZE {
      return Err(MatrixError::InvalidArgument {
        expected: Self::SIZE,
        actual: elements.len(),
      });
    }
    Ok(Self::from_elements(elements))
  }
}

impl<T, const W: usize, const H: usize> AsRef<[T]> for FixedMatrix<T, W, H> {
  fn as_ref(&self) -> &[T] {
    self.as_slice()
  }
}

impl<T, const W: usize, const H: usize> AsMut<[T]> for FixedMatrix<T, W, H> {
  fn as_mut(&mut self) -> &mut [T] {
    self.as_mut_slice()
  }
}

impl<T, const W: usize, const H: usize> IntoIterator for FixedMatrix<T, W, H> {
  type Item = T;
  type IntoIter = Flatten<array::IntoIter<[T; W], H>>;

  fn into_iter(self) -> Self::IntoIter {
    self.rows.into_iter().flatten()
  }
}

impl<'a, T, const W: usize, const H: usize> IntoIterator for &'a FixedMatrix<T, W, H> {
  type Item = &'a T;
  type IntoIter = slice::Iter<'a, T>;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

impl<'a, T, const W: usize, const H: usize> IntoIterator for &'a mut FixedMatrix<T, W, H> {
  type Item = &'a mut T;
  type IntoIter = slice::IterMut<'a, T>;

  fn into_iter(self) -> Self::IntoIter {
    self.iter_mut()
  }
}

// unchecked access, a bad index panics

impl<T, const W: usize, const H: usize> Index<usize> for FixedMatrix<T, W, H> {
  type Output = T;

  #[inline]
  fn index(&self, pos: usize) -> &T {
    &self.as_slice()[pos]
  }
}

impl<T, const W: usize, const H: usize> IndexMut<usize> for FixedMatrix<T, W, H> {
  #[inline]
  fn index_mut(&mut self, pos: usize) -> &mut T {
    &mut self.as_mut_slice()[pos]
  }
}

impl<T, const W: usize, const H: usize> Index<(usize, usize)> for FixedMatrix<T, W, H> {
  type Output = T;

  /// Index is `(x, y)`, column first.
  #[inline]
  fn index(&self, (x, y): (usize, usize)) -> &T {
    &self.rows[y][x]
  }
}

impl<T, const W: usize, const H: usize> IndexMut<(usize, usize)> for FixedMatrix<T, W, H> {
  #[inline]
  fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut T {
    &mut self.rows[y][x]
  }
}

#[test]
fn dimensions() {
  let m = FixedMatrix::<f32, 2, 3>::default();
  assert_eq!(m.width(), 2);
  assert_eq!(m.height(), 3);
  assert_eq!(m.size(), 6);
  assert_eq!(FixedMatrix::<u8, 4, 5>::SIZE, 20);
  assert!(m.iter().all(|v| *v == 0.));

  let empty = FixedMatrix::<i32, 0, 0>::default();
  assert_eq!(empty.size(), 0);
  assert!(empty.as_slice().is_empty());
}

#[test]
fn linear_layout_matches_grid() {
  let m = FixedMatrix::<usize, 3, 4>::from_fn(|x, y| x * 10 + y);
  for y in 0..m.height() {
    for x in 0..m.width() {
      assert_eq!(m.at_xy(x, y), Ok(&m[x + y * 3]));
      assert_eq!(m.at(x + y * 3), Ok(&m[(x, y)]));
    }
  }
}

#[test]
fn explicit_list_arity() {
  let err = FixedMatrix::<i32, 2, 3>::try_from_slice(&[1, 2, 3, 4, 5]);
  assert_eq!(
    err,
    Err(MatrixError::InvalidArgument {
      expected: 6,
      actual: 5
    })
  );

  let m = FixedMatrix::<i32, 2, 3>::try_from_slice(&[1, 2, 3, 4, 5, 6]).unwrap();
  assert_eq!(m.as_slice(), &[1, 2, 3, 4, 5, 6]);
  assert_eq!(m[(1, 0)], 2);
  assert_eq!(m[(0, 2)], 5);

  let from_vec = FixedMatrix::<i32, 2, 3>::try_from(vec![1, 2, 3, 4, 5, 6]).unwrap();
  assert_eq!(from_vec, m);
  assert!(FixedMatrix::<i32, 2, 3>::try_from(vec![1; 7]).is_err());
}

#[test]
fn assign_keeps_content_on_failure() {
  let mut m = FixedMatrix::<i32, 2, 2>::splat(7);
  assert!(m.assign(&[1, 2, 3]).is_err());
  assert_eq!(m, FixedMatrix::splat(7));

  m.assign(&[1, 2, 3, 4]).unwrap();
  assert_eq!(m.into_rows(), [[1, 2], [3, 4]]);
}

#[test]
fn checked_access_bounds() {
  let mut m = FixedMatrix::<i32, 2, 3>::from_fn(|x, y| (x + y * 2) as i32);
  assert_eq!(m.at(5), Ok(&5));
  assert_eq!(
    m.at(6),
    Err(MatrixError::OutOfRange(MatrixIndex::Linear(6)))
  );
  assert!(m.at(usize::MAX).is_err());
  assert_eq!(
    m.at_xy(2, 0),
    Err(MatrixError::OutOfRange(MatrixIndex::Grid { x: 2, y: 0 }))
  );
  assert!(m.at_xy(0, 3).is_err());

  *m.at_xy_mut(1, 2).unwrap() = 42;
  assert_eq!(m[5], 42);
  *m.at_mut(0).unwrap() = -1;
  assert_eq!(m[(0, 0)], -1);
  assert!(m.at_mut(6).is_err());
}

#[test]
#[should_panic]
fn unchecked_access_panics_out_of_range() {
  let m = FixedMatrix::<i32, 2, 2>::default();
  let _ = m[4];
}

#[test]
fn build_from_elements() {
  let m: FixedMatrix<i32, 2, 2> = (1..).take(10).collect();
  assert_eq!(m.as_slice(), &[1, 2, 3, 4]);

  let mut source = vec![1, 2, 3, 4, 5].into_iter();
  let m = FixedMatrix::<i32, 2, 2>::from_elements(source.by_ref());
  assert_eq!(m.as_slice(), &[1, 2, 3, 4]);
  assert_eq!(source.next(), Some(5));

  let short = FixedMatrix::<i32, 2, 2>::from_elements([9, 8]);
  assert_eq!(short.as_slice(), &[9, 8, 0, 0]);
}

#[test]
fn swap_contents() {
  let mut a = FixedMatrix::<String, 2, 1>::from_rows([["a".into(), "b".into()]]);
  let mut b = FixedMatrix::<String, 2, 1>::from_rows([["c".into(), "d".into()]]);
  a.swap(&mut b);
  assert_eq!(a.as_slice(), &["c", "d"]);
  assert_eq!(b.as_slice(), &["a", "b"]);
}

#[test]
fn map_and_transpose() {
  let m = FixedMatrix::<i32, 3, 2>::from_rows([[1, 2, 3], [4, 5, 6]]);
  let t = m.transpose();
  assert_eq!(t.width(), 2);
  assert_eq!(t.height(), 3);
  assert_eq!(t.into_rows(), [[1, 4], [2, 5], [3, 6]]);

  let halves = m.map(|v| v as f32 / 2.);
  assert_eq!(halves[(2, 1)], 3.);

  let owned: Vec<i32> = m.into_iter().collect();
  assert_eq!(owned, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn pod_cast() {
  let m = FixedMatrix::<u32, 2, 2>::from_rows([[1, 2], [3, 4]]);
  let flat: [u32; 4] = bytemuck::cast(m);
  assert_eq!(flat, [1, 2, 3, 4]);
  assert_eq!(bytemuck::bytes_of(&m).len(), 16);
}
