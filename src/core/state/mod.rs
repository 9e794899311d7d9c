//=========================================================================
// State System
//=========================================================================
//
// Manages layered game states and stack-based state switching.
//
// Architecture:
//   StateStack
//     ├─ active: Vec<Box<dyn State>>           (bottom .. top)
//     └─ pending_removal: Vec<Box<dyn State>>  (popped, awaiting commit)
//
// Flow (once per frame, driven by the host loop):
//   process_input() → update() → draw()
//
// Removal is deferred: popping relocates a state into pending_removal,
// and the stack destroys the queue's contents only after the update
// traversal has fully returned. A state may therefore pop itself from
// inside its own update() without being destroyed mid-call.
//
//=========================================================================

//=== Module Declarations =================================================

mod request_queue;
mod state_stack;

//=== Public API ==========================================================

pub use request_queue::{RequestQueue, StackRequest};
pub use state_stack::StateStack;

//=== State Trait =========================================================

/// Defines one layer of game behavior: a menu, a dialogue box, an
/// exploration mode, a cut-scene.
///
/// States are owned by a [`StateStack`]; only the topmost state receives
/// input, while update and draw propagation across the stack is governed
/// by opacity (see [`State::update`]).
///
/// States never hold a reference to their owning stack. Instead,
/// `handle_input` and `update` receive a [`RequestQueue`] through which a
/// state asks the stack to push, pop, or clear. Requests are applied at
/// the end of the stack's update pass, so a state that pops itself always
/// finishes its own `update` call before it is destroyed.
///
/// # Minimal Implementation
///
/// Every method has a default body; a unit struct is already a valid
/// (opaque, inert) state:
///
/// ```rust
/// use questforge::core::state::{RequestQueue, State};
///
/// struct PauseMenu {
///     resume_requested: bool,
/// }
///
/// impl State for PauseMenu {
///     fn name(&self) -> &str {
///         "pause-menu"
///     }
///
///     fn update(&mut self, requests: &mut RequestQueue) -> bool {
///         if self.resume_requested {
///             // Dismiss ourselves; destruction happens after this
///             // call returns.
///             requests.pop_state();
///         }
///         true
///     }
/// }
/// ```
pub trait State {
    /// Short identifier used in log output.
    ///
    /// Default implementation returns `"state"`. Override for readable
    /// stack traces in the debug log.
    fn name(&self) -> &str {
        "state"
    }

    /// Called when the state lands on the active stack.
    ///
    /// Default implementation does nothing. Override to initialize
    /// per-activation resources.
    fn on_enter(&mut self) {}

    /// Called when the state leaves the active stack, before its
    /// deferred destruction.
    ///
    /// Default implementation does nothing. Override to release
    /// resources that should not wait for `Drop`.
    fn on_exit(&mut self) {}

    /// Consumes input events for one frame.
    ///
    /// Only the topmost state receives input; states below an occluding
    /// state see nothing. Stack mutations go through `requests`.
    fn handle_input(&mut self, _requests: &mut RequestQueue) {}

    /// Advances the state one frame.
    ///
    /// The return value controls propagation to the states below:
    /// `true` (opaque, the default) stops the update pass here, so lower
    /// states stay paused; `false` (transparent, e.g. a HUD overlay)
    /// lets the pass descend to the next state down.
    fn update(&mut self, _requests: &mut RequestQueue) -> bool {
        true
    }

    /// Renders the state's visual representation.
    ///
    /// The stack draws every active state bottom-to-top, so the topmost
    /// state is drawn last and appears on top.
    fn draw(&mut self) {}
}
