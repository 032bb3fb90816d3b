use serde::{Deserialize, Serialize};

/// Discrete push applied to the cart for one timestep.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Push the cart to the left (index 0).
    Left,
    /// Push the cart to the right (index 1).
    Right,
}

impl Action {
    /// Stable numeric index of the action (Left = 0, Right = 1).
    pub fn index(self) -> usize {
        match self {
            Action::Left => 0,
            Action::Right => 1,
        }
    }

    /// Inverse of [`index`](Action::index); out-of-range indices yield `None`.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Action::Left),
            1 => Some(Action::Right),
            _ => None,
        }
    }
}
