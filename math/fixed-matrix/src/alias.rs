use crate::FixedMatrix;

macro_rules! define_shape_alias {
  ($(($w:tt, $h:tt)),+ $(,)?) => {
    paste::paste! {
      $(
        #[doc = "A matrix of " $w " columns and " $h " rows."]
        pub type [<Mat $w x $h>]<T> = FixedMatrix<T, $w, $h>;
      )+
    }
  };
}

#[rustfmt::skip]
define_shape_alias!(
  (1, 2), (1, 3), (1, 4),
  (2, 1), (2, 2), (2, 3), (2, 4),
  (3, 1), (3, 2), (3, 3), (3, 4),
  (4, 1), (4, 2), (4, 3), (4, 4),
);

#[test]
fn alias_shape() {
  let m = Mat2x3::<u8>::default();
  assert_eq!((m.width(), m.height()), (2, 3));

  let product: Mat4x3<u8> = m * Mat4x2::<u8>::default();
  assert_eq!(product.size(), 12);
}
