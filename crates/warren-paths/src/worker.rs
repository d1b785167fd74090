//! Background solving over a channel.
//!
//! One dedicated worker thread runs the whole solve and pushes events into
//! an `mpsc` channel; the consumer drains them at its own pace, so display
//! pacing never leaks into the algorithm. Events arrive in strict
//! visitation order because a solve has exactly one worker.

use std::sync::mpsc::{self, Receiver};
use std::thread::{self, JoinHandle};

use warren_core::{MazeGrid, Point};

use crate::{SolveResult, Solver, Strategy};

/// Progress notifications emitted by a background solve.
#[derive(Clone, Debug)]
pub enum SolveEvent {
    /// A cell was dequeued by the search, in visitation order.
    Visited(Point),
    /// The search finished; always the final event.
    Done(SolveResult),
}

/// Solve on a dedicated worker thread.
///
/// Takes ownership of the grid for the duration of the solve and hands it
/// back through the join handle. Sends one [`SolveEvent::Visited`] per
/// dequeue and a terminal [`SolveEvent::Done`]. There is no mid-solve
/// cancellation: a consumer that loses interest just drops the receiver and
/// the remaining sends are discarded.
pub fn solve_in_background(
    mut grid: MazeGrid,
    strategy: Strategy,
) -> (Receiver<SolveEvent>, JoinHandle<MazeGrid>) {
    let (tx, rx) = mpsc::channel();
    let handle = thread::spawn(move || {
        let mut solver = Solver::new();
        let result = solver.solve_observed(&mut grid, strategy, |p| {
            tx.send(SolveEvent::Visited(p)).ok();
        });
        tx.send(SolveEvent::Done(result)).ok();
        grid
    });
    (rx, handle)
}
