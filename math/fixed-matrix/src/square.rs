use std::ops::AddAssign;

use num_traits::{One, Zero};

use crate::*;

impl<T: Zero + One, const N: usize> FixedMatrix<T, N, N> {
  /// Ones on the diagonal, zeros everywhere else.
  pub fn identity() -> Self {
    Self::from_fn(|x, y| if x == y { T::one() } else { T::zero() })
  }
}

impl<T: Zero + AddAssign, const W: usize, const H: usize> Zero for FixedMatrix<T, W, H> {
  #[inline(always)]
  fn zero() -> Self {
    Self::from_fn(|_, _| T::zero())
  }
  #[inline(always)]
  fn is_zero(&self) -> bool {
    self.iter().all(T::is_zero)
  }
}

impl<T, const N: usize> One for FixedMatrix<T, N, N>
where
  T: Zero + One + Default + Clone,
{
  #[inline(always)]
  fn one() -> Self {
    Self::identity()
  }
}

#[test]
fn identity() {
  let identity = FixedMatrix::<f32, 3, 3>::identity();
  assert_eq!(
    identity.into_rows(),
    [[1., 0., 0.], [0., 1., 0.], [0., 0., 1.]]
  );
  assert_eq!(identity, FixedMatrix::one());

  let m = FixedMatrix::<f32, 3, 3>::from_fn(|x, y| (x * 3 + y) as f32 - 4.);
  assert_eq!(identity * m, m);
  assert_eq!(m * identity, m);
}

#[test]
fn zero() {
  let z = FixedMatrix::<i32, 2, 3>::zero();
  assert!(z.is_zero());
  assert_eq!(z, FixedMatrix::default());

  let mut m = FixedMatrix::<i32, 2, 3>::splat(5);
  assert!(!m.is_zero());
  m.set_zero();
  assert!(m.is_zero());
  assert_eq!(m + FixedMatrix::splat(2), FixedMatrix::splat(2));
}
