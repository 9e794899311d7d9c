//=========================================================================
// Game Loop
//=========================================================================
//
// Host-loop integration glue for the state stack.
//
// Architecture:
// ```text
//     GameLoopBuilder  ──build()──>  GameLoop  ──run()──>  [Runtime]
//         │                            │
//         └─ with_fps()                └─ frames the stack at a fixed
//                                         rate until it empties
// ```
//
// The loop is single-threaded and cooperative: each frame it calls
// process_input, update, and draw on the stack in that exact order,
// then sleeps out the remainder of the frame budget.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::thread;
use std::time::{Duration, Instant};

//=== External Dependencies ===============================================

use log::{info, warn};

//=== Internal Dependencies ===============================================

use crate::core::state::StateStack;

//=== GameLoopBuilder =====================================================

/// Builder for configuring and constructing a [`GameLoop`].
///
/// # Default Values
///
/// - **FPS**: 60.0 (frames per second)
///
/// # Examples
///
/// ```no_run
/// use questforge::GameLoopBuilder;
/// use questforge::core::state::State;
///
/// struct TitleScreen;
/// impl State for TitleScreen {}
///
/// GameLoopBuilder::new()
///     .with_fps(30.0)
///     .build()
///     .init(|stack| {
///         stack.push_state(TitleScreen);
///     })
///     .run();
/// ```
pub struct GameLoopBuilder {
    fps: f64,
}

impl GameLoopBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self { fps: 60.0 }
    }

    /// Sets the target frames per second for the loop.
    ///
    /// Each frame the loop sleeps out whatever remains of the frame
    /// budget after the stack has been processed. Higher values give
    /// more responsive input at the cost of CPU.
    ///
    /// Default: 60.0
    ///
    /// # Panics
    ///
    /// Panics if `fps <= 0.0`.
    pub fn with_fps(mut self, fps: f64) -> Self {
        assert!(fps > 0.0, "FPS must be positive, got {}", fps);
        self.fps = fps;
        self
    }

    /// Builds the loop with an empty state stack.
    pub fn build(self) -> GameLoop {
        info!("Building game loop (FPS: {})", self.fps);

        GameLoop {
            stack: StateStack::new(),
            frame_duration: Duration::from_secs_f64(1.0 / self.fps),
        }
    }
}

impl Default for GameLoopBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== GameLoop ============================================================

/// Fixed-timestep frame driver for a [`StateStack`].
///
/// Owns the stack and calls its three frame operations in the required
/// order — input, update, draw — once per frame. The loop terminates
/// when the stack runs out of active states, which is how a game signals
/// quit: the last state pops itself (or clears the stack).
pub struct GameLoop {
    stack: StateStack,
    frame_duration: Duration,
}

impl GameLoop {
    //--- Initialization ---------------------------------------------------

    /// Seeds the stack before the loop starts.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use questforge::GameLoopBuilder;
    /// # use questforge::core::state::State;
    /// # struct TitleScreen;
    /// # impl State for TitleScreen {}
    /// GameLoopBuilder::new()
    ///     .build()
    ///     .init(|stack| {
    ///         stack.push_state(TitleScreen);
    ///     })
    ///     .run();
    /// ```
    pub fn init<F>(mut self, init_fn: F) -> Self
    where
        F: FnOnce(&mut StateStack),
    {
        init_fn(&mut self.stack);
        self
    }

    /// Returns the owned state stack.
    pub fn stack(&self) -> &StateStack {
        &self.stack
    }

    /// Returns the owned state stack mutably.
    pub fn stack_mut(&mut self) -> &mut StateStack {
        &mut self.stack
    }

    //--- Execution --------------------------------------------------------

    /// Runs a single frame: input, update, draw.
    ///
    /// Exposed for hosts that embed the stack in their own loop (editor
    /// shells, test harnesses) instead of handing control to
    /// [`GameLoop::run`]. Callers must keep the three-call order intact
    /// across frames, which this method does by construction.
    pub fn frame(&mut self) {
        self.stack.process_input();
        self.stack.update();
        self.stack.draw();
    }

    /// Runs the loop until the stack empties, then returns.
    ///
    /// Maintains pacing by sleeping out the unused part of each frame
    /// budget. Frames that overrun their budget are not compensated for;
    /// the loop simply starts the next frame late.
    pub fn run(mut self) {
        if self.stack.is_empty() {
            warn!("Game loop started with an empty stack, exiting immediately");
            return;
        }

        info!(
            "Starting game loop (frame budget: {:?})",
            self.frame_duration
        );

        while !self.stack.is_empty() {
            let frame_start = Instant::now();

            self.frame();

            let elapsed = frame_start.elapsed();
            if elapsed < self.frame_duration {
                thread::sleep(self.frame_duration - elapsed);
            }
        }

        info!("State stack empty, game loop exiting");
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::{RequestQueue, State};

    struct CountDown {
        frames_left: u32,
    }

    impl State for CountDown {
        fn name(&self) -> &str {
            "count-down"
        }

        fn update(&mut self, requests: &mut RequestQueue) -> bool {
            if self.frames_left == 0 {
                requests.pop_state();
            } else {
                self.frames_left -= 1;
            }
            true
        }
    }

    //--- GameLoopBuilder Tests --------------------------------------------

    #[test]
    fn builder_defaults() {
        let builder = GameLoopBuilder::new();
        assert_eq!(builder.fps, 60.0);
    }

    #[test]
    fn builder_with_fps() {
        let builder = GameLoopBuilder::new().with_fps(120.0);
        assert_eq!(builder.fps, 120.0);
    }

    #[test]
    #[should_panic(expected = "FPS must be positive")]
    fn builder_with_fps_panics_on_zero() {
        GameLoopBuilder::new().with_fps(0.0);
    }

    #[test]
    #[should_panic(expected = "FPS must be positive")]
    fn builder_with_fps_panics_on_negative() {
        GameLoopBuilder::new().with_fps(-60.0);
    }

    #[test]
    fn builder_build_creates_loop_with_empty_stack() {
        let game_loop = GameLoopBuilder::new().build();
        assert!(game_loop.stack().is_empty());
    }

    //--- GameLoop Tests ---------------------------------------------------

    #[test]
    fn init_seeds_the_stack() {
        let game_loop = GameLoopBuilder::new().build().init(|stack| {
            stack.push_state(CountDown { frames_left: 3 });
        });

        assert_eq!(game_loop.stack().len(), 1);
        assert_eq!(game_loop.stack().top().unwrap().name(), "count-down");
    }

    #[test]
    fn frame_advances_the_stack_once() {
        let mut game_loop = GameLoopBuilder::new().build().init(|stack| {
            stack.push_state(CountDown { frames_left: 0 });
        });

        game_loop.frame();
        assert!(game_loop.stack().is_empty());
    }

    #[test]
    fn run_exits_when_the_stack_empties() {
        // High FPS keeps the pacing sleeps negligible for the test.
        GameLoopBuilder::new()
            .with_fps(100_000.0)
            .build()
            .init(|stack| {
                stack.push_state(CountDown { frames_left: 5 });
            })
            .run();
    }
}
