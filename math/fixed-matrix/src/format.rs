use std::fmt;

use crate::*;

/// Row by row, every element followed by a tab and every row by a newline.
///
/// Width and precision given to the formatter apply to each element, so
/// `format!("{:.2}", m)` prints every element with two decimals.
impl<T: fmt::Display, const W: usize, const H: usize> fmt::Display for FixedMatrix<T, W, H> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    for y in 0..H {
      for x in 0..W {
        fmt::Display::fmt(&self[(x, y)], f)?;
        f.write_str("\t")?;
      }
      f.write_str("\n")?;
    }
    Ok(())
  }
}

#[test]
fn layout() {
  let m = FixedMatrix::<i32, 2, 2>::try_from_slice(&[1, 2, 3, 4]).unwrap();
  assert_eq!(m.to_string(), "1\t2\t\n3\t4\t\n");

  let wide = FixedMatrix::<i32, 3, 1>::from_rows([[7, 8, 9]]);
  assert_eq!(wide.to_string(), "7\t8\t9\t\n");
}

#[test]
fn empty() {
  assert_eq!(FixedMatrix::<f32, 0, 0>::default().to_string(), "");
  assert_eq!(FixedMatrix::<f32, 3, 0>::default().to_string(), "");
  // rows without columns still end their line
  assert_eq!(FixedMatrix::<f32, 0, 2>::default().to_string(), "\n\n");
}

#[test]
fn forwards_element_format() {
  let m = FixedMatrix::<f64, 2, 1>::from_rows([[1., 2.5]]);
  assert_eq!(format!("{:.1}", m), "1.0\t2.5\t\n");
  assert_eq!(format!("{:>4}", m), "   1\t 2.5\t\n");
}
