//! Pure logic: no filesystem access beyond path arithmetic.

pub mod extension;
pub mod file_list;
pub mod reference;
pub mod section;
