//! Full game tree materialization in slot-addressed form
//!
//! Positions are stored under the same arithmetic addressing scheme as
//! [`ArrayTree`](crate::tree::ArrayTree) with order 9: the position reached by
//! playing move `m` from the position in slot `p` lives in slot
//! `9*p + m + 1`. The slot index alone therefore encodes the full move path
//! from the root.
//!
//! Unlike the dense container, storage here is a sparse map keyed by slot
//! index: the address space grows by a factor of nine per ply while the number
//! of reachable positions shrinks, so a pre-sized flat array would be almost
//! entirely unused. Expansion uses an explicit work-list stack rather than
//! native recursion, keeping call-stack usage flat regardless of target depth.

use std::collections::BTreeMap;

use tracing::debug;

use crate::{
    error::Result,
    tictactoe::{BoardState, Player},
    tree::{self, ArrayTree},
};

/// Branching factor of the move-indexed game tree: one child slot per cell.
pub const TREE_ORDER: usize = 9;

/// A materialized game tree keyed by arithmetic slot index.
#[derive(Debug, Clone)]
pub struct GameTreeArray {
    slots: BTreeMap<usize, BoardState>,
}

impl GameTreeArray {
    fn new() -> Self {
        GameTreeArray {
            slots: BTreeMap::new(),
        }
    }

    /// Position stored at `slot`, if any.
    pub fn get(&self, slot: usize) -> Option<&BoardState> {
        self.slots.get(&slot)
    }

    /// Number of materialized positions.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the tree holds no positions.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Highest occupied slot index, if any.
    pub fn max_slot(&self) -> Option<usize> {
        self.slots.keys().next_back().copied()
    }

    /// Iterate over `(slot, position)` pairs in ascending slot order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &BoardState)> {
        self.slots.iter().map(|(&slot, state)| (slot, state))
    }

    /// Parent slot of `slot` under the shared addressing formula.
    pub fn parent_slot(slot: usize) -> Option<usize> {
        tree::parent_slot(TREE_ORDER, slot)
    }

    /// Child slot reached by playing `move_pos` from the position in `parent`.
    pub fn child_slot(parent: usize, move_pos: usize) -> usize {
        tree::child_slot(TREE_ORDER, parent, move_pos)
    }

    /// Materialize the slots below `capacity` into a dense [`ArrayTree`].
    ///
    /// Slots ascend parent-before-child, so insertion satisfies the dense
    /// container's no-overwrite discipline.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::CapacityExceeded`] if any occupied slot does
    /// not fit; choose a capacity of at least `max_slot() + 1`.
    pub fn to_array_tree(&self, capacity: usize) -> Result<ArrayTree<BoardState>> {
        let mut dense = ArrayTree::new(TREE_ORDER, capacity)?;

        for (slot, state) in self.iter() {
            if slot == 0 {
                dense.add_root(*state)?;
            } else {
                let parent = (slot - 1) / TREE_ORDER;
                let ordinal = (slot - 1) % TREE_ORDER;
                dense.add_child(parent, ordinal, *state)?;
            }
        }

        Ok(dense)
    }
}

/// Expand the game tree from an empty board into slot-addressed form.
///
/// Every legal continuation is enumerated; expansion stops at terminal
/// positions and, when `max_plies` is given, at that depth. The root (slot 0)
/// is the empty board with `first_player` to move.
pub fn expand_game_tree(first_player: Player, max_plies: Option<usize>) -> GameTreeArray {
    let mut tree = GameTreeArray::new();
    let mut work = vec![(0usize, BoardState::new_with_player(first_player), 0usize)];

    while let Some((slot, state, ply)) = work.pop() {
        if max_plies.is_none_or(|limit| ply < limit) {
            for pos in state.legal_moves() {
                let child = state
                    .make_move(pos)
                    .expect("legal moves are always applicable");
                work.push((GameTreeArray::child_slot(slot, pos), child, ply + 1));
            }
        }

        tree.slots.insert(slot, state);
    }

    debug!(
        positions = tree.len(),
        max_slot = tree.max_slot(),
        "game tree expanded"
    );
    tree
}
