//! Frame observer trait for monitoring cloth simulation progress.

/// Trait for observing cloth frames.
///
/// Implement this trait to monitor solver progress (e.g., for debugging,
/// visualization, or performance profiling). All methods have default
/// no-op implementations.
pub trait FrameObserver {
    /// Called after each full pass over the constraint list.
    fn on_constraint_iteration(&mut self, _iteration: usize) {}

    /// Called after all particles have been integrated (Verlet step).
    fn on_integrate(&mut self) {}

    /// Called after a sphere collision pass with the number of particles moved.
    fn on_collision(&mut self, _corrected: usize) {}

    /// Called when `advance` is fully complete.
    fn on_frame_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpFrameObserver;

impl FrameObserver for NoOpFrameObserver {}
