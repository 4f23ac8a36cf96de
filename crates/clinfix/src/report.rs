//! Markdown rendering of per-file reports and batch insights.

use crate::clinfix::{BatchResult, FileResult};
use crate::validation::IssueCategory;

impl FileResult {
    /// Render the per-file report as Markdown.
    ///
    /// Sections appear in a fixed order and read `None` when empty. The
    /// report ends with a horizontal rule.
    pub fn report_markdown(&self) -> String {
        let mut out = format!(
            "### {} — {} rows × {} cols\n\n**Domain detected:** {}\n\n",
            self.file,
            self.rows,
            self.columns,
            self.domain.map(|d| d.code()).unwrap_or("Unknown")
        );

        for category in IssueCategory::ALL {
            let messages = self.ledger.messages(category);
            let body = if messages.is_empty() {
                "None".to_string()
            } else {
                messages.join("\n")
            };
            out.push_str(&format!("**{}:**\n{}\n\n", category.label(), body));
        }

        out.push_str("---\n");
        out
    }
}

impl BatchResult {
    /// Render every file report, separated by blank lines.
    pub fn report_markdown(&self) -> String {
        if let Some(message) = &self.message {
            return message.clone();
        }
        self.files
            .iter()
            .map(FileResult::report_markdown)
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Short batch-level insights with a reviewer recommendation.
    pub fn insights(&self) -> String {
        let mut out = format!(
            "Batch insights:\n- Files processed: {}\n- Total auto-generated queries: {}\n",
            self.files.len(),
            self.queries.len()
        );
        if self.queries.is_empty() {
            out.push_str("- No automatic queries generated.\n");
        } else {
            out.push_str("- Recommendation: Review queries and prepare site queries.\n");
        }
        out
    }
}
