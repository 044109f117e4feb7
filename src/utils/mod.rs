pub mod environment;

pub use environment::{get_claude_dir, get_projects_dir};
