//! Time subsystem.
//!
//! One `RunClock` per runtime; it anchors at windowing-layer startup and
//! never consults wall-clock time.

mod clock;

pub use clock::RunClock;
