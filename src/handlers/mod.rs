pub mod analyze;
pub mod help;
pub mod options;

#[cfg(test)]
mod test_handlers;

use std::sync::Arc;

use crate::analyzer::MoodAnalyzer;

// Re-export handler types from submodules
pub use help::HelpHandler;

/// Handler for MCP tool operations
pub struct ToolHandlers {
    pub(crate) analyzer: Arc<dyn MoodAnalyzer>,
    pub(crate) help: HelpHandler,
}

impl ToolHandlers {
    pub fn new(analyzer: Arc<dyn MoodAnalyzer>) -> Self {
        Self {
            analyzer,
            help: HelpHandler::new(),
        }
    }
}
