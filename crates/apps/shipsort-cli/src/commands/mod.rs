//! CLI command implementations.

pub mod completions;
pub mod init;
pub mod inspect;
pub mod run;

pub use completions::completions;
pub use init::init;
pub use inspect::inspect;
pub use run::{run, RunOptions};
