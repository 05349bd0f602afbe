#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use targa_image as image;

#[doc(inline)]
pub use targa_io as io;

#[doc(inline)]
pub use targa_blend as blend;
