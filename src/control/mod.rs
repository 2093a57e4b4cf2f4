//! Shared state used by engine tasks to stop each other after a failure.
//!
//! Both primitives are created once per engine invocation and dropped after
//! all tasks have joined.

pub mod cancel;
pub mod trap;

pub use self::cancel::CancelSignal;
pub use self::trap::ErrorTrap;
