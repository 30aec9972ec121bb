//! A dense matrix whose width and height are part of its type.
//!
//! `FixedMatrix<T, W, H>` stores its `W * H` elements inline, in the linear order
//! `x + y * W` (x is the column, y the row). Operand shapes are checked by the
//! compiler: element-wise operators only accept the same shape, and a `W x H`
//! matrix can only be multiplied by a `X x W` one.

mod alias;
mod error;
mod format;
mod matrix;
mod ops;
mod serialize;
mod square;

pub use alias::*;
pub use error::*;
pub use matrix::*;
