use std::ops::*;

use crate::*;

/// Generates an element-wise operator and its assignment form for the by-value
/// and by-ref permutations. The assignment form does the work.
macro_rules! impl_element_wise_operator {
  ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident) => {
    impl<T: $OpAssign, const W: usize, const H: usize> $OpAssign for FixedMatrix<T, W, H> {
      #[inline]
      fn $op_assign(&mut self, rhs: Self) {
        self.iter_mut().zip(rhs).for_each(|(a, b)| a.$op_assign(b));
      }
    }

    impl<'a, T, const W: usize, const H: usize> $OpAssign<&'a FixedMatrix<T, W, H>>
      for FixedMatrix<T, W, H>
    where
      T: $OpAssign + Clone,
    {
      #[inline]
      fn $op_assign(&mut self, rhs: &'a Self) {
        self
          .iter_mut()
          .zip(rhs)
          .for_each(|(a, b)| a.$op_assign(b.clone()));
      }
    }

    impl<T: $OpAssign, const W: usize, const H: usize> $Op for FixedMatrix<T, W, H> {
      type Output = Self;

      #[inline]
      fn $op(mut self, rhs: Self) -> Self {
        self.$op_assign(rhs);
        self
      }
    }

    impl<'a, T, const W: usize, const H: usize> $Op<&'a FixedMatrix<T, W, H>>
      for FixedMatrix<T, W, H>
    where
      T: $OpAssign + Clone,
    {
      type Output = Self;

      #[inline]
      fn $op(mut self, rhs: &'a Self) -> Self {
        self.$op_assign(rhs);
        self
      }
    }

    impl<'a, 'b, T, const W: usize, const H: usize> $Op<&'b FixedMatrix<T, W, H>>
      for &'a FixedMatrix<T, W, H>
    where
      T: $OpAssign + Clone,
    {
      type Output = FixedMatrix<T, W, H>;

      #[inline]
      fn $op(self, rhs: &'b FixedMatrix<T, W, H>) -> FixedMatrix<T, W, H> {
        let mut result = self.clone();
        result.$op_assign(rhs);
        result
      }
    }
  };
}

impl_element_wise_operator!(Add, add, AddAssign, add_assign);
impl_element_wise_operator!(Sub, sub, SubAssign, sub_assign);

impl<T: Neg<Output = T>, const W: usize, const H: usize> Neg for FixedMatrix<T, W, H> {
  type Output = Self;

  fn neg(self) -> Self {
    self.map(|v| -v)
  }
}

impl<T: MulAssign + Clone, const W: usize, const H: usize> MulAssign<T> for FixedMatrix<T, W, H> {
  fn mul_assign(&mut self, scalar: T) {
    self.iter_mut().for_each(|v| *v *= scalar.clone());
  }
}

impl<T: MulAssign + Clone, const W: usize, const H: usize> Mul<T> for FixedMatrix<T, W, H> {
  type Output = Self;

  fn mul(mut self, scalar: T) -> Self {
    self *= scalar;
    self
  }
}

// scalar on the left can only be implemented per concrete scalar type
macro_rules! impl_scalar_on_left {
  ($($S:ty),+) => {
    $(
      impl<const W: usize, const H: usize> Mul<FixedMatrix<$S, W, H>> for $S {
        type Output = FixedMatrix<$S, W, H>;

        #[inline]
        fn mul(self, matrix: FixedMatrix<$S, W, H>) -> Self::Output {
          matrix * self
        }
      }

      impl<'a, const W: usize, const H: usize> Mul<&'a FixedMatrix<$S, W, H>> for $S {
        type Output = FixedMatrix<$S, W, H>;

        #[inline]
        fn mul(self, matrix: &'a FixedMatrix<$S, W, H>) -> Self::Output {
          *matrix * self
        }
      }
    )+
  };
}

impl_scalar_on_left!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// `W x H` times `X x W` gives `X x H`: the left width is the right height.
///
/// Element `(k, j)` of the result sums `left(i, j) * right(k, i)` over `i` in
/// increasing order, starting from `T::default()`. The order is part of the
/// contract for types where addition does not associate, like floats.
impl<'a, 'b, T, const W: usize, const H: usize, const X: usize> Mul<&'b FixedMatrix<T, X, W>>
  for &'a FixedMatrix<T, W, H>
where
  T: Default + Clone + Add<Output = T> + Mul<Output = T>,
{
  type Output = FixedMatrix<T, X, H>;

  fn mul(self, rhs: &'b FixedMatrix<T, X, W>) -> Self::Output {
    FixedMatrix::from_fn(|k, j| {
      (0..W).fold(T::default(), |sum, i| {
        sum + self[(i, j)].clone() * rhs[(k, i)].clone()
      })
    })
  }
}

impl<T, const W: usize, const H: usize, const X: usize> Mul<FixedMatrix<T, X, W>>
  for FixedMatrix<T, W, H>
where
  T: Default + Clone + Add<Output = T> + Mul<Output = T>,
{
  type Output = FixedMatrix<T, X, H>;

  #[inline]
  fn mul(self, rhs: FixedMatrix<T, X, W>) -> Self::Output {
    &self * &rhs
  }
}

impl<'a, T, const W: usize, const H: usize, const X: usize> Mul<&'a FixedMatrix<T, X, W>>
  for FixedMatrix<T, W, H>
where
  T: Default + Clone + Add<Output = T> + Mul<Output = T>,
{
  type Output = FixedMatrix<T, X, H>;

  #[inline]
  fn mul(self, rhs: &'a FixedMatrix<T, X, W>) -> Self::Output {
    &self * rhs
  }
}

// the product has to keep the left operand's shape, so only a `W x W` right
// operand is accepted
impl<T, const W: usize, const H: usize> MulAssign<FixedMatrix<T, W, W>> for FixedMatrix<T, W, H>
where
  T: Default + Clone + Add<Output = T> + Mul<Output = T>,
{
  fn mul_assign(&mut self, rhs: FixedMatrix<T, W, W>) {
    *self = &*self * &rhs;
  }
}

impl<'a, T, const W: usize, const H: usize> MulAssign<&'a FixedMatrix<T, W, W>>
  for FixedMatrix<T, W, H>
where
  T: Default + Clone + Add<Output = T> + Mul<Output = T>,
{
  fn mul_assign(&mut self, rhs: &'a FixedMatrix<T, W, W>) {
    *self = &*self * rhs;
  }
}

#[cfg(test)]
mod test {
  use crate::*;

  fn sample<const W: usize, const H: usize>(seed: i64) -> FixedMatrix<i64, W, H> {
    FixedMatrix::from_fn(|x, y| (x as i64 * 7 - y as i64 * 3 + seed) % 11)
  }

  #[test]
  fn add_sub() {
    let a = sample::<3, 2>(1);
    let b = sample::<3, 2>(5);

    assert_eq!(a + b, b + a);
    assert_eq!((a + b) - b, a);
    assert_eq!(&a + &b, a + b);
    assert_eq!(a - &b, a - b);

    let sum = a + b;
    for i in 0..sum.size() {
      assert_eq!(sum[i], a[i] + b[i]);
    }

    let mut c = a;
    c += b;
    c -= &b;
    assert_eq!(c, a);
    assert_eq!(-a + a, FixedMatrix::default());
  }

  #[test]
  fn scalar() {
    let a = sample::<2, 3>(2);
    let b = sample::<2, 3>(9);

    assert_eq!(a * 3, 3 * a);
    assert_eq!(3 * &a, a * 3);
    assert_eq!(4 * (a + b), 4 * a + 4 * b);

    let mut c = a;
    c *= -2;
    for i in 0..c.size() {
      assert_eq!(c[i], a[i] * -2);
    }

    let f = FixedMatrix::<f64, 2, 2>::from_rows([[0.1, 0.2], [0.3, 0.7]]);
    let g = FixedMatrix::<f64, 2, 2>::from_rows([[1.5, -0.25], [3.1, 0.9]]);
    let lhs = 1.3 * (f + g);
    let rhs = 1.3 * f + 1.3 * g;
    for (l, r) in lhs.iter().zip(rhs.iter()) {
      assert!((l - r).abs() < 1e-12);
    }
  }

  #[test]
  fn product_shape() {
    let a = FixedMatrix::<i32, 2, 3>::from_rows([[1, 2], [3, 4], [5, 6]]);
    let b = FixedMatrix::<i32, 4, 2>::from_rows([[1, 2, 3, 4], [5, 6, 7, 8]]);

    let c: FixedMatrix<i32, 4, 3> = a * b;
    assert_eq!(
      c.into_rows(),
      [[11, 14, 17, 20], [23, 30, 37, 44], [35, 46, 57, 68]]
    );
    assert_eq!(&a * &b, c);
    assert_eq!(a * &b, c);
  }

  #[test]
  fn identity_product() {
    let mut identity = FixedMatrix::<i64, 3, 3>::splat(0);
    for i in 0..3 {
      identity[(i, i)] = 1;
    }
    let m = sample::<3, 3>(4);
    assert_eq!(identity * m, m);
    assert_eq!(m * identity, m);
  }

  #[test]
  fn product_in_place() {
    let a = sample::<2, 4>(3);
    let square = sample::<2, 2>(8);
    let mut b = a;
    b *= square;
    assert_eq!(b, a * square);
    b *= &FixedMatrix::identity();
    assert_eq!(b, a * square);
  }

  #[test]
  fn accumulation_runs_left_to_right() {
    let row = FixedMatrix::<f64, 3, 1>::from_rows([[1e20, -1e20, 1.]]);
    let column = FixedMatrix::<f64, 1, 3>::splat(1.);
    assert_eq!((row * column)[0], 1.);
  }

  #[test]
  fn empty_inner_dimension() {
    let a = FixedMatrix::<i32, 0, 2>::default();
    let b = FixedMatrix::<i32, 3, 0>::default();
    assert_eq!(a * b, FixedMatrix::<i32, 3, 2>::default());
  }

  #[test]
  fn matches_cgmath() {
    let cgmath_mat1 = cgmath::Matrix4::<f32>::from_translation(cgmath::vec3(1., 2., 3.));
    let cgmath_mat2 = cgmath::Matrix4::<f32>::from_nonuniform_scale(3., -2., 0.5);
    let cgmath_r = cgmath_mat1 * cgmath_mat2;
    let cgmath_r: &[[f32; 4]; 4] = cgmath_r.as_ref();

    // cgmath arrays are column major, one inner array per column
    let to_matrix = |m: cgmath::Matrix4<f32>| {
      let columns: &[[f32; 4]; 4] = m.as_ref();
      let columns = *columns;
      FixedMatrix::from_rows(columns).transpose()
    };
    let math_r = to_matrix(cgmath_mat1) * to_matrix(cgmath_mat2);

    assert_eq!(&math_r.transpose().into_rows(), cgmath_r);
  }
}
