pub mod password;
pub mod shortid;
pub mod tags;

pub use shortid::{decode, encode, DecodeError};
pub use tags::extract_tags;
