use std::collections::HashMap;

use crate::anchors::target::{AnchorHandle, AnchorTarget, Collection};
use crate::calendar::date::DateKey;
use crate::foundation::error::{BujoError, BujoResult};

/// Mutable allocation table used only during the pre-pass.
///
/// Handles are numbered in allocation order starting at 1, so an identical traversal yields
/// identical handles run to run.
#[derive(Clone, Debug, Default)]
pub struct AnchorRegistry {
    handles: HashMap<AnchorTarget, AnchorHandle>,
    order: Vec<AnchorTarget>,
}

impl AnchorRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the handle for `target`, allocating it on first request.
    pub fn allocate(&mut self, target: AnchorTarget) -> BujoResult<AnchorHandle> {
        if let Some(&h) = self.handles.get(&target) {
            return Ok(h);
        }
        let next = u32::try_from(self.order.len() + 1)
            .ok()
            .and_then(AnchorHandle::from_index)
            .ok_or_else(|| BujoError::anchor("anchor handle space exhausted"))?;
        self.handles.insert(target, next);
        self.order.push(target);
        Ok(next)
    }

    /// Number of distinct targets allocated so far.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether nothing has been allocated yet.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// End the pre-pass and hand out the read-only snapshot.
    pub fn freeze(self) -> Links {
        Links {
            handles: self.handles,
            order: self.order,
        }
    }
}

/// Read-only snapshot of every anchor allocated for a build.
///
/// Optional features look up with the `Option`-returning accessors; `None` means the feature is
/// off and the caller must omit the link. [`Links::require`] is for targets a page owns.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Links {
    handles: HashMap<AnchorTarget, AnchorHandle>,
    order: Vec<AnchorTarget>,
}

impl Links {
    /// Handle for `target`, if it was allocated.
    pub fn get(&self, target: AnchorTarget) -> Option<AnchorHandle> {
        self.handles.get(&target).copied()
    }

    /// Handle for `target`, or an [`BujoError::Anchor`] if the pre-pass never allocated it.
    pub fn require(&self, target: AnchorTarget) -> BujoResult<AnchorHandle> {
        self.get(target)
            .ok_or_else(|| BujoError::anchor(format!("no anchor allocated for {target}")))
    }

    /// The year hub.
    pub fn year(&self) -> Option<AnchorHandle> {
        self.get(AnchorTarget::Year)
    }

    /// Month page `month` (1..=12).
    pub fn month(&self, month: u32) -> Option<AnchorHandle> {
        self.get(AnchorTarget::Month(month))
    }

    /// The `index`-th week listed on `month`'s page.
    pub fn week(&self, month: u32, index: usize) -> Option<AnchorHandle> {
        self.get(AnchorTarget::Week { month, index })
    }

    /// Day page for `date`.
    pub fn day(&self, date: DateKey) -> Option<AnchorHandle> {
        self.get(AnchorTarget::Day(date))
    }

    /// Collections hub page.
    pub fn collections_hub(&self) -> Option<AnchorHandle> {
        self.get(AnchorTarget::CollectionsHub)
    }

    /// One collection page.
    pub fn collection(&self, collection: Collection) -> Option<AnchorHandle> {
        self.get(AnchorTarget::Collection(collection))
    }

    /// Targets in allocation order; the i-th entry owns handle `i + 1`.
    pub fn allocation_order(&self) -> &[AnchorTarget] {
        &self.order
    }

    /// Number of allocated anchors.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether no anchors were allocated.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Count of allocated targets matching `pred`.
    pub fn count_where(&self, pred: impl Fn(&AnchorTarget) -> bool) -> usize {
        self.order.iter().filter(|t| pred(t)).count()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/anchors/registry.rs"]
mod tests;
