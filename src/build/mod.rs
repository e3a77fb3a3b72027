//! Two-phase build: allocate every anchor, then render every page.

pub(crate) mod planner;
