//! CLI command implementations.

pub mod files;
pub mod reactions;
pub mod stats;
pub mod thread;

pub use files::show_files;
pub use reactions::show_reactions;
pub use stats::show_stats;
pub use thread::show_thread;
