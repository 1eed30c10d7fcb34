//! Seams for incrementally maintained window statistics.

/// Trait for statistics maintained incrementally over a sliding window.
pub trait WindowStat<T> {
    /// Value emitted once per filled window.
    type Output;

    /// Feed one measurement into the window.
    ///
    /// Returns the statistic for the window ending at this measurement
    /// once the window has filled, and `None` while it is still
    /// filling.
    fn step(&mut self, value: T) -> Option<Self::Output>;

    /// Reset internal state; the next measurement starts a fresh scan.
    fn reset(&mut self);
}
