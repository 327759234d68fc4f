//! Run-mode window directives.
//!
//! Every enumerated script gets its own tmux window. Window 0 is the base
//! window the session starts with, so generated windows are numbered from 1
//! and focus returns to window 0 once all of them exist.

pub mod escape;
pub mod operations;
pub mod types;

pub use operations::{assemble, render};
pub use types::{BASE_WINDOW_INDEX, WindowDirective};
