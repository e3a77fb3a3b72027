//! Page composition: turns one logical page into drawing calls bound to its own anchor.

pub(crate) mod grid;
pub(crate) mod page;
pub(crate) mod pages;
