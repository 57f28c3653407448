//! Command implementations for the packrc CLI.

pub mod check;
pub mod explain;
pub mod print;
mod utils;

pub use check::execute as check_execute;
pub use explain::execute as explain_execute;
pub use print::execute as print_execute;
pub use utils::{ResolvedTarget, resolve_target};
