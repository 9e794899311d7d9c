//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use questforge::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Host loop
pub use crate::engine::{GameLoop, GameLoopBuilder};

// State system
pub use crate::core::state::{RequestQueue, StackRequest, State, StateStack};
