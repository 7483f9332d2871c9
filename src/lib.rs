pub mod action;
pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod matcher;
pub mod output;
pub mod sanitize;
pub mod walker;

pub use crate::action::{substitute, ActionDispatcher, SUBJECT_TOKEN};
pub use crate::cli::Cli;
pub use crate::config::{Capabilities, Platform, SearchConfig};
pub use crate::error::{FindError, Result};
pub use crate::filter::StdinFilter;
pub use crate::matcher::{ColorKey, MatchOutcome, Matcher, RenderOptions};
pub use crate::sanitize::{compile, sanitize, MATCH_ALL};
pub use crate::walker::{TraversalStats, TreeTraverser};
