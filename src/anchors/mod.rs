//! Navigation anchors: the targets a page can own and the table that maps them to handles.
//!
//! The build allocates every anchor before drawing anything, then freezes the table into
//! [`Links`](registry::Links). Pages may link to any handle in the snapshot, including pages
//! that have not been drawn yet.

pub(crate) mod registry;
pub(crate) mod target;
