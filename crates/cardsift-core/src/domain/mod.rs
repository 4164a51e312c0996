pub mod contact;
pub mod phone;

pub use contact::{RawContact, ResolvedContact};
pub use phone::normalize_phone;
