use anyhow::Context;
use fixed_matrix::*;

fn main() -> anyhow::Result<()> {
  env_logger::builder().init();

  let left = Mat2x3::<i64>::try_from_slice(&[1, 2, 3, 4, 5, 6])
    .context("left operand needs exactly 6 elements")?;
  let right = Mat4x2::<i64>::from_rows([[1, 2, 3, 4], [5, 6, 7, 8]]);
  log::info!(
    "multiplying {}x{} by {}x{}",
    left.width(),
    left.height(),
    right.width(),
    right.height()
  );

  let product = left * right;
  println!("product:\n{product}");

  let scaled = 2 * product - product;
  assert_eq!(scaled, product);

  let mut rotation = Mat2x2::<f64>::from_rows([[0., -1.], [1., 0.]]);
  let quarter = rotation;
  for _ in 0..3 {
    rotation *= quarter;
  }
  log::info!("four quarter turns give identity: {}", rotation == Mat2x2::identity());
  println!("rotation after four quarter turns:\n{rotation:.1}");

  match product.at_xy(4, 0) {
    Ok(value) => println!("(4, 0) = {value}"),
    Err(err) => log::warn!("{err}"),
  }

  let corner = product.at(product.size() - 1)?;
  println!("last element: {corner}");

  Ok(())
}
