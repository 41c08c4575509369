pub mod docs;
pub mod shared;
