//=========================================================================
// State Stack Property Tests
//=========================================================================
//
// Model-based check of the stack discipline: for any sequence of
// push/pop operations, the top of the stack is the last pushed state
// not yet popped.
//
//=========================================================================

use proptest::prelude::*;

use questforge::prelude::*;

struct Tagged {
    label: String,
}

impl Tagged {
    fn new(id: u8) -> Self {
        Self {
            label: id.to_string(),
        }
    }
}

impl State for Tagged {
    fn name(&self) -> &str {
        &self.label
    }
}

#[derive(Debug, Clone)]
enum Op {
    Push(u8),
    Pop,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![any::<u8>().prop_map(Op::Push), Just(Op::Pop)]
}

proptest! {
    #[test]
    fn top_is_the_last_unpopped_push(ops in proptest::collection::vec(op_strategy(), 0..64)) {
        let mut stack = StateStack::new();
        let mut model: Vec<u8> = Vec::new();

        for op in &ops {
            match op {
                Op::Push(id) => {
                    stack.push_state(Tagged::new(*id));
                    model.push(*id);
                }
                Op::Pop => {
                    stack.pop_state();
                    model.pop();
                }
            }
        }

        prop_assert_eq!(stack.len(), model.len());
        match model.last() {
            Some(id) => {
                let expected = id.to_string();
                prop_assert_eq!(stack.top().unwrap().name(), expected.as_str());
            }
            None => prop_assert!(stack.top().is_none()),
        }

        // Committing afterwards never disturbs the active stack.
        stack.update();
        prop_assert_eq!(stack.len(), model.len());
    }
}
