//! D4 symmetry group operations on the 3x3 board

use serde::{Deserialize, Serialize};

use super::board::{BoardState, Cell};

/// D4 symmetry transformation (dihedral group of the square)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct D4Transform {
    /// Rotation in degrees (0, 90, 180, 270)
    pub rotation: u16,
    /// Whether to apply reflection
    pub reflection: bool,
}

impl D4Transform {
    /// Create identity transform
    pub fn identity() -> Self {
        D4Transform {
            rotation: 0,
            reflection: false,
        }
    }

    /// Get all 8 D4 transforms
    pub fn all() -> Vec<D4Transform> {
        let mut transforms = Vec::with_capacity(8);
        for rotation in [0, 90, 180, 270] {
            transforms.push(D4Transform {
                rotation,
                reflection: false,
            });
            transforms.push(D4Transform {
                rotation,
                reflection: true,
            });
        }
        transforms
    }

    /// Apply transform to a position (0-8)
    ///
    /// Reflection (mirror across the vertical axis) is applied before rotation.
    pub fn transform_position(&self, pos: usize) -> usize {
        let (mut row, mut col) = (pos / 3, pos % 3);

        if self.reflection {
            col = 2 - col;
        }

        // Apply rotation (clockwise)
        for _ in 0..(self.rotation / 90) {
            let new_row = col;
            let new_col = 2 - row;
            row = new_row;
            col = new_col;
        }

        row * 3 + col
    }

    /// Get the inverse transform
    pub fn inverse(&self) -> D4Transform {
        if self.reflection {
            // In reflect-then-rotate order every reflected transform is an
            // involution, so it is its own inverse.
            *self
        } else {
            D4Transform {
                rotation: (360 - self.rotation) % 360,
                reflection: false,
            }
        }
    }
}

impl BoardState {
    /// Apply a D4 transform to the board
    pub fn transform(&self, t: &D4Transform) -> Self {
        let mut cells = [Cell::Empty; 9];
        for i in 0..9 {
            cells[t.transform_position(i)] = self.cells[i];
        }
        BoardState {
            cells,
            to_move: self.to_move,
        }
    }

    /// Get the canonical (lexicographically minimal encoding) form under D4 symmetry
    pub fn canonical(&self) -> Self {
        let mut best_state = *self;
        let mut best_encoding = self.encode();

        for transform in D4Transform::all() {
            let transformed = self.transform(&transform);
            let encoding = transformed.encode();
            if encoding < best_encoding {
                best_encoding = encoding;
                best_state = transformed;
            }
        }

        best_state
    }
}
