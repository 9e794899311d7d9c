//=========================================================================
// Questforge — Library Root
//
// This crate defines the public API surface of Questforge, a layered
// game-state controller with deferred state removal.
//
// Responsibilities:
// - Expose the state system (`State`, `StateStack`, `RequestQueue`)
// - Expose the host-loop facade (`GameLoop`)
// - Provide clean separation between the frame driver and the
//   stack/state machinery it schedules
//
// Typical usage:
// ```no_run
// use questforge::GameLoopBuilder;
// use questforge::core::state::State;
//
// struct TitleScreen;
// impl State for TitleScreen {}
//
// fn main() {
//     GameLoopBuilder::new()
//         .build()
//         .init(|stack| stack.push_state(TitleScreen))
//         .run();
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` contains the state system itself. It is fully public: hosts
// that bring their own loop use `core::state::StateStack` directly and
// never touch the `GameLoop` facade.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `engine` defines the host-loop facade (`GameLoop`) and its builder.
// The module itself stays private; its types are re-exported below.
//
mod engine;

//--- Public Exports ------------------------------------------------------
//
// Re-exports the loop facade at the crate root so applications can
// simply `use questforge::GameLoopBuilder;` without knowing the internal
// module structure.
//
pub use engine::{GameLoop, GameLoopBuilder};
