//=========================================================================
// Request Queue
//=========================================================================
//
// Queue for deferred stack mutations.
//
// States deposit requests here during their update or input pass. The
// stack applies the queue after the update traversal returns, so the
// sequence being traversed never changes underneath the traversal.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::State;

//=== Stack Request =======================================================

/// A single deferred stack mutation.
///
/// Push carries the new state by value; ownership transfers into the
/// queue and from there into the stack.
pub enum StackRequest {
    /// Adds a new state on top of the stack.
    Push(Box<dyn State>),

    /// Removes the topmost state from the stack.
    Pop,

    /// Removes every state from the stack.
    Clear,
}

impl std::fmt::Debug for StackRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Push(state) => write!(f, "Push({})", state.name()),
            Self::Pop => write!(f, "Pop"),
            Self::Clear => write!(f, "Clear"),
        }
    }
}

//=== Request Queue =======================================================

/// Queue of deferred stack mutations.
///
/// Handed to [`State::handle_input`] and [`State::update`] as the sole
/// channel through which a state operates on its owning stack. Requests
/// are applied in FIFO order at the end of the stack's update pass.
pub struct RequestQueue {
    queue: Vec<StackRequest>,
}

impl RequestQueue {
    /// Creates a new empty request queue.
    pub fn new() -> Self {
        Self { queue: Vec::new() }
    }

    /// Requests that `state` be pushed on top of the stack.
    ///
    /// The state is boxed for storage; ownership transfers to the queue.
    pub fn push_state<T>(&mut self, state: T)
    where
        T: State + 'static,
    {
        self.queue.push(StackRequest::Push(Box::new(state)));
    }

    /// Requests that an already-boxed state be pushed on top of the stack.
    pub fn push_boxed(&mut self, state: Box<dyn State>) {
        self.queue.push(StackRequest::Push(state));
    }

    /// Requests that the topmost state be popped.
    ///
    /// Issuing this more than once per frame pops more than one state;
    /// pops beyond the bottom of the stack are no-ops.
    pub fn pop_state(&mut self) {
        self.queue.push(StackRequest::Pop);
    }

    /// Requests that every state be removed from the stack.
    pub fn clear_states(&mut self) {
        self.queue.push(StackRequest::Clear);
    }

    /// Returns true if no requests are queued.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Returns the number of queued requests.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Takes all requests from the queue, leaving it empty.
    ///
    /// Used by the stack to apply the queue at the end of an update pass.
    pub fn take(&mut self) -> Vec<StackRequest> {
        std::mem::take(&mut self.queue)
    }
}

impl Default for RequestQueue {
    fn default() -> Self {
        Self::new()
    }
}

//=== Tests ===============================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct Inert;

    impl State for Inert {
        fn name(&self) -> &str {
            "inert"
        }
    }

    #[test]
    fn new_queue_is_empty() {
        let queue = RequestQueue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
    }

    #[test]
    fn requests_are_queued_in_fifo_order() {
        let mut queue = RequestQueue::new();
        queue.push_state(Inert);
        queue.pop_state();
        queue.clear_states();

        let requests = queue.take();
        assert_eq!(requests.len(), 3);
        assert!(matches!(requests[0], StackRequest::Push(_)));
        assert!(matches!(requests[1], StackRequest::Pop));
        assert!(matches!(requests[2], StackRequest::Clear));
    }

    #[test]
    fn take_leaves_queue_empty() {
        let mut queue = RequestQueue::new();
        queue.pop_state();
        queue.pop_state();

        assert_eq!(queue.take().len(), 2);
        assert!(queue.is_empty());
    }

    #[test]
    fn debug_format_names_pushed_state() {
        let mut queue = RequestQueue::new();
        queue.push_state(Inert);

        let requests = queue.take();
        assert_eq!(format!("{:?}", requests[0]), "Push(inert)");
    }
}
