//! Array-indexed n-ary tree with arithmetic addressing
//!
//! An [`ArrayTree`] stores the values of a fixed-order tree in a flat slot
//! vector. Parent/child relationships are never stored; they are computed from
//! slot indices alone:
//!
//! - slot 0 is the root,
//! - the children of slot `p` occupy slots `k*p + 1 ..= k*p + k` for order `k`,
//! - the parent of a non-root slot `p` is `(p - 1) / k`.
//!
//! This trades memory density for pointer-free, allocation-free traversal and
//! is only appropriate when the order and maximum depth are known upfront,
//! such as enumerating a game tree of bounded ply.

use crate::error::{Error, Result};

/// Compute the slot index of a child from its parent slot and ordinal.
pub fn child_slot(order: usize, parent: usize, ordinal: usize) -> usize {
    order * parent + ordinal + 1
}

/// Compute the parent slot of a non-root slot, or `None` for the root.
pub fn parent_slot(order: usize, slot: usize) -> Option<usize> {
    if slot == 0 {
        None
    } else {
        Some((slot - 1) / order)
    }
}

/// Fixed-capacity tree of order `k` stored in a flat slot vector.
///
/// Occupancy strictly increases: values are never deleted or overwritten.
#[derive(Debug, Clone)]
pub struct ArrayTree<T> {
    slots: Vec<Option<T>>,
    count: usize,
    order: usize,
}

impl<T> ArrayTree<T> {
    /// Create an empty tree with the given order and slot capacity.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if `order` or `capacity` is zero.
    pub fn new(order: usize, capacity: usize) -> Result<Self> {
        if order == 0 {
            return Err(Error::InvalidConfiguration {
                message: "order must be at least 1".to_string(),
            });
        }
        if capacity == 0 {
            return Err(Error::InvalidConfiguration {
                message: "capacity must be at least 1".to_string(),
            });
        }

        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);

        Ok(ArrayTree {
            slots,
            count: 0,
            order,
        })
    }

    /// Number of children every node may have.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Total slot count, fixed at construction.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots.
    pub fn size(&self) -> usize {
        self.count
    }

    /// Whether no slot is occupied.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Slot index of the root, or `None` if the tree is empty.
    pub fn root(&self) -> Option<usize> {
        if self.count > 0 { Some(0) } else { None }
    }

    /// Parent slot of `slot`, or `None` for the root.
    ///
    /// Pure address arithmetic; the occupancy of either slot is not checked.
    pub fn parent(&self, slot: usize) -> Option<usize> {
        parent_slot(self.order, slot)
    }

    /// Slot index of the `ordinal`-th child of `parent`, or `None` when the
    /// computed slot would exceed capacity.
    ///
    /// Pure address arithmetic; the occupancy of either slot is not checked.
    pub fn child(&self, parent: usize, ordinal: usize) -> Option<usize> {
        let slot = child_slot(self.order, parent, ordinal);
        if slot < self.capacity() { Some(slot) } else { None }
    }

    /// Place the root value into slot 0.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RootAlreadyExists`] if the tree already has a root.
    pub fn add_root(&mut self, value: T) -> Result<usize> {
        if self.slots[0].is_some() {
            return Err(Error::RootAlreadyExists);
        }
        self.slots[0] = Some(value);
        self.count += 1;
        Ok(0)
    }

    /// Store `value` as the `ordinal`-th child of `parent`, returning its slot.
    ///
    /// # Errors
    ///
    /// - [`Error::ChildOrdinalOutOfRange`] if `ordinal >= order`
    /// - [`Error::CapacityExceeded`] if the computed slot exceeds capacity
    /// - [`Error::SlotOccupied`] if the slot already holds a value
    pub fn add_child(&mut self, parent: usize, ordinal: usize, value: T) -> Result<usize> {
        if ordinal >= self.order {
            return Err(Error::ChildOrdinalOutOfRange {
                ordinal,
                order: self.order,
            });
        }

        let slot = child_slot(self.order, parent, ordinal);
        if slot >= self.capacity() {
            return Err(Error::CapacityExceeded {
                slot,
                capacity: self.capacity(),
            });
        }
        if self.slots[slot].is_some() {
            return Err(Error::SlotOccupied { slot });
        }

        self.slots[slot] = Some(value);
        self.count += 1;
        Ok(slot)
    }

    /// Get the value stored at `slot`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SlotNotFound`] if the slot is out of range or empty.
    pub fn get(&self, slot: usize) -> Result<&T> {
        self.slots
            .get(slot)
            .and_then(Option::as_ref)
            .ok_or(Error::SlotNotFound { slot })
    }

    /// Get the value stored in the `ordinal`-th child of `parent`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SlotNotFound`] if the child slot exceeds capacity or
    /// holds no value.
    pub fn get_child(&self, parent: usize, ordinal: usize) -> Result<&T> {
        let slot = child_slot(self.order, parent, ordinal);
        self.get(slot)
    }
}
