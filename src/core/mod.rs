//=========================================================================
// Core Systems
//=========================================================================
//
// Namespace for the library's core subsystems. Currently hosts only the
// state system; future subsystems that live below the host-loop facade
// land here.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod state;

//=== Public API ==========================================================

pub use state::{RequestQueue, StackRequest, State, StateStack};
