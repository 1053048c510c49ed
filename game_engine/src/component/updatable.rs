//! Updatable trait - anything that advances with elapsed time

/// Capability shared by every component taking part in the update cycle.
///
/// Implementations never fail. `delta_time` is the elapsed time in seconds
/// since the previous update and is not validated: negative, NaN and
/// infinite values are passed through as-is.
pub trait Updatable: Send {
    /// Advance internal state by `delta_time` seconds
    fn update(&mut self, delta_time: f32);

    /// Whether the component is live and should be updated.
    ///
    /// Valid at any point of the component's lifetime, including before
    /// the first `update()`.
    fn is_active(&self) -> bool;
}

/// Boxed components are themselves updatable, so a `Box<dyn InternalComponent>`
/// can be stored wherever a `dyn Updatable` is expected.
impl<T: Updatable + ?Sized> Updatable for Box<T> {
    fn update(&mut self, delta_time: f32) {
        (**self).update(delta_time)
    }

    fn is_active(&self) -> bool {
        (**self).is_active()
    }
}
