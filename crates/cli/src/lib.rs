pub mod backup;
pub mod capture;
pub mod cli;
pub mod color;
pub mod completions;
pub mod error;
pub mod library;
pub mod output;
pub mod pattern;
pub mod reader;
pub mod render;
pub mod session;

pub use capture::CaptureTable;
pub use cli::{CaptureArgs, Cli, Command, ExplainArgs, FindArgs, OutputFormat, ReplaceArgs};
pub use error::{Error, ExitCode, Result};
pub use library::{PatternLibrary, SavedPattern};
pub use pattern::explain::{ExplainToken, TokenKind, explain};
pub use pattern::{CompiledMatcher, HighlightColor, MatchSpan, Pattern};
pub use reader::{FileContent, FileReader};
pub use render::{Rendered, render_markup};
pub use session::{SessionState, UndoOutcome};
