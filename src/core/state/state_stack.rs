//=========================================================================
// State Stack
//=========================================================================
//
// Owner and scheduler of layered game states.
//
// States are stored by value (boxed) in a stack; the topmost state has
// input and update priority. Removal is a two-step protocol: pop/clear
// relocate states into a pending queue, and the queue is destroyed only
// after the update traversal has returned.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use super::{RequestQueue, StackRequest, State};

//=== State Stack =========================================================

/// Manages an ordered collection of mutually-exclusive game states.
///
/// The stack owns its states exclusively: pushing transfers ownership in,
/// and only the stack's commit step destroys a state. The topmost state
/// receives input; the update pass walks top-down until it hits an opaque
/// state; drawing walks bottom-up so the top state appears on top.
///
/// # Frame protocol
///
/// The host loop calls, once per frame and in this order:
///
/// 1. [`StateStack::process_input`]
/// 2. [`StateStack::update`]
/// 3. [`StateStack::draw`]
///
/// Requests queued by states during the frame are applied at the end of
/// `update`, followed by the removal commit. A state that pops itself
/// from inside its own `update` is therefore never destroyed while its
/// call is still on the stack.
pub struct StateStack {
    active: Vec<Box<dyn State>>,
    pending_removal: Vec<Box<dyn State>>,
    requests: RequestQueue,
}

impl StateStack {
    //--- Construction -----------------------------------------------------

    /// Creates a new stack with no states.
    pub fn new() -> Self {
        Self {
            active: Vec::new(),
            pending_removal: Vec::new(),
            requests: RequestQueue::new(),
        }
    }

    //--- Queries ----------------------------------------------------------

    /// Returns the topmost active state, or `None` if the stack is empty.
    pub fn top(&self) -> Option<&dyn State> {
        self.active.last().map(|state| state.as_ref())
    }

    /// Returns the topmost active state mutably.
    pub fn top_mut(&mut self) -> Option<&mut (dyn State + '_)> {
        match self.active.last_mut() {
            Some(state) => Some(state.as_mut()),
            None => None,
        }
    }

    /// Returns the number of active states.
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Returns true if no states are active.
    ///
    /// States awaiting the removal commit do not count as active.
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    //--- Mutation ---------------------------------------------------------

    /// Pushes `state` on top of the stack, making it the new top.
    ///
    /// Ownership transfers to the stack; the state is boxed for storage
    /// and its `on_enter` hook runs immediately. The same concrete type
    /// may be pushed any number of times — identity, not type, is what
    /// the stack tracks.
    pub fn push_state<T>(&mut self, state: T)
    where
        T: State + 'static,
    {
        self.push_boxed(Box::new(state));
    }

    /// Pushes an already-boxed state on top of the stack.
    pub fn push_boxed(&mut self, mut state: Box<dyn State>) {
        debug!("Pushing state '{}' onto the stack", state.name());
        state.on_enter();
        self.active.push(state);
    }

    /// Removes the topmost state, deferring its destruction.
    ///
    /// The state is relocated into the pending-removal queue and its
    /// `on_exit` hook runs. The returned reference allows post-pop
    /// inspection and stays valid until the stack is next mutated; the
    /// state itself is destroyed at the next removal commit.
    ///
    /// Popping an empty stack is a no-op returning `None`, not an error.
    pub fn pop_state(&mut self) -> Option<&dyn State> {
        let Some(mut state) = self.active.pop() else {
            debug!("Pop requested on an empty stack, ignoring");
            return None;
        };

        debug!("Popping state '{}' off the stack", state.name());
        state.on_exit();
        self.pending_removal.push(state);

        self.pending_removal.last().map(|state| state.as_ref())
    }

    /// Removes every state from the stack, deferring destruction.
    ///
    /// `on_exit` runs bottom-to-top as states move into the
    /// pending-removal queue. The active stack is empty immediately;
    /// the states themselves live until the next removal commit.
    pub fn clear(&mut self) {
        if self.active.is_empty() {
            return;
        }

        debug!("Clearing {} state(s) from the stack", self.active.len());
        for mut state in self.active.drain(..) {
            state.on_exit();
            self.pending_removal.push(state);
        }
    }

    //--- Frame Protocol ---------------------------------------------------

    /// Forwards input handling to the topmost state.
    ///
    /// States below the top never receive input while occluded. Requests
    /// the state queues here are applied at the end of the next
    /// [`StateStack::update`] pass.
    pub fn process_input(&mut self) {
        let Some(state) = self.active.last_mut() else {
            return;
        };

        state.handle_input(&mut self.requests);
    }

    /// Updates active states, then applies queued requests and commits
    /// pending removals.
    ///
    /// The traversal walks top-down and stops at the first state whose
    /// `update` returns `true` (opaque); transparent states let the pass
    /// descend. The sequence being traversed cannot change mid-pass:
    /// states mutate the stack only through the request queue, which is
    /// drained strictly after the traversal returns.
    pub fn update(&mut self) {
        for index in (0..self.active.len()).rev() {
            let opaque = self.active[index].update(&mut self.requests);
            if opaque {
                break;
            }
        }

        self.apply_requests();
        self.commit_removals();
    }

    /// Draws every active state, bottom-to-top.
    ///
    /// The topmost state is drawn last so it appears on top; states below
    /// stay visible for layered UI effects regardless of opacity.
    pub fn draw(&mut self) {
        for state in self.active.iter_mut() {
            state.draw();
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn apply_requests(&mut self) {
        for request in self.requests.take() {
            match request {
                StackRequest::Push(state) => self.push_boxed(state),
                StackRequest::Pop => {
                    self.pop_state();
                }
                StackRequest::Clear => self.clear(),
            }
        }
    }

    fn commit_removals(&mut self) {
        if self.pending_removal.is_empty() {
            return;
        }

        debug!("Destroying {} removed state(s)", self.pending_removal.len());
        self.pending_removal.clear();
    }
}

impl Default for StateStack {
    fn default() -> Self {
        Self::new()
    }
}

//=== Tests ===============================================================
