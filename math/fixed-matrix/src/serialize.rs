use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::*;

// a flat sequence of every element in linear order

impl<T: Serialize, const W: usize, const H: usize> Serialize for FixedMatrix<T, W, H> {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(self.iter())
  }
}

impl<'de, T, const W: usize, const H: usize> Deserialize<'de> for FixedMatrix<T, W, H>
where
  T: Deserialize<'de> + Default,
{
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let elements = Vec::<T>::deserialize(deserializer)?;
    Self::try_from(elements).map_err(de::Error::custom)
  }
}

#[test]
fn json() {
  let m = FixedMatrix::<i32, 3, 2>::from_rows([[1, 2, 3], [4, 5, 6]]);
  let text = serde_json::to_string(&m).unwrap();
  assert_eq!(text, "[1,2,3,4,5,6]");

  let back: FixedMatrix<i32, 3, 2> = serde_json::from_str(&text).unwrap();
  assert_eq!(back, m);

  let err = serde_json::from_str::<FixedMatrix<i32, 2, 2>>(&text).unwrap_err();
  assert!(err
    .to_string()
    .starts_with("wrong number of elements given: matrix holds 4, got 6"));
}
