//! The single-step execution contract shared by both engines

/// A deterministic machine that performs one unit of work per call.
///
/// Implementations own all of their state; two machines never share
/// anything mutable. Every transition is atomic, so "play" is repeated
/// calls to [`advance`](StepMachine::advance), "pause" is not calling it,
/// and "reset" rebuilds the machine from its input.
pub trait StepMachine {
    /// Data the machine is (re)initialized from
    type Input: Clone;

    /// Fully formed view of the machine after a step
    type Snapshot: Clone;

    /// Perform exactly one step and return the resulting snapshot.
    ///
    /// Once [`is_complete`](StepMachine::is_complete) is true this is a
    /// no-op returning the unchanged terminal snapshot.
    fn advance(&mut self) -> Self::Snapshot;

    /// Discard all progress and reinitialize from `input`
    fn reset(&mut self, input: Self::Input);

    /// Whether the terminal state has been reached
    fn is_complete(&self) -> bool;

    /// Current snapshot without stepping
    fn snapshot(&self) -> Self::Snapshot;

    /// Number of steps applied since the last reset
    fn steps_taken(&self) -> usize;

    /// The input the machine was last reset with
    fn input(&self) -> &Self::Input;

    /// Reset from the stored input
    fn restart(&mut self) {
        let input = self.input().clone();
        self.reset(input);
    }

    /// Step until complete and return the terminal snapshot
    fn run_to_completion(&mut self) -> Self::Snapshot {
        while !self.is_complete() {
            self.advance();
        }
        self.snapshot()
    }

    /// Move to the state reached after `steps` steps from the start.
    ///
    /// Stepping is forward-only, so this restarts and replays. Requests
    /// past the end stop at the terminal state.
    fn seek(&mut self, steps: usize) -> Self::Snapshot {
        self.restart();
        while self.steps_taken() < steps && !self.is_complete() {
            self.advance();
        }
        self.snapshot()
    }
}
