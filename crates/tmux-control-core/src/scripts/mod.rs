//! Script directory enumeration for run mode.
//!
//! Lists the regular files of one directory, filters them by extension and
//! orders them naturally, so that `step2.sh` comes before `step10.sh`.

pub mod errors;
pub mod handler;
pub mod natural;
pub mod operations;
pub mod types;

pub use errors::ScriptError;
pub use handler::enumerate;
pub use natural::natural_cmp;
pub use types::{ExtensionFilter, ScriptFile};
