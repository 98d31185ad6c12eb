mod depth;
mod error;
mod pixels;


pub use depth::BitDepth;
pub use error::{CoreError, Result};
pub use pixels::{Pixels, SliceImage};
