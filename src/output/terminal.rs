//! Terminal renderer: one aligned line per token, then a summary block.

use colored::Colorize;

use crate::models::{LexReport, Token};
use crate::output::OutputRenderer;

/// Width of the banner rules.
pub const RULE_WIDTH: usize = 80;

/// Terminal output renderer with colored, aligned columns.
pub struct TerminalRenderer;

/// Plain aligned token line, shared by the terminal renderer and log files.
pub fn format_token_line(token: &Token) -> String {
    format!(
        "Token: {:20} | Value: {:30} | Line: {:4} | Column: {:4}",
        token.kind.name(),
        token.value,
        token.line,
        token.column
    )
}

fn banner(title: &str) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    format!("{}\n{}\n{}\n", rule.dimmed(), title.bold(), rule.dimmed())
}

impl TerminalRenderer {
    fn render_one(&self, report: &LexReport, output: &mut String) {
        output.push_str(&banner(&format!("LEXICAL ANALYSIS: {}", report.source)));
        output.push('\n');

        for token in &report.tokens {
            output.push_str(&format!(
                "Token: {} | Value: {} | Line: {:4} | Column: {:4}\n",
                format!("{:20}", token.kind.name()).cyan(),
                format!("{:30}", token.value).bold(),
                token.line,
                token.column,
            ));
        }

        let summary = report.summary();
        output.push('\n');
        output.push_str(&banner("SUMMARY"));
        output.push_str(&format!(
            "Recognized tokens: {}\n",
            summary.tokens.to_string().green().bold()
        ));
        let errors = if summary.errors == 0 {
            summary.errors.to_string().green().bold()
        } else {
            summary.errors.to_string().red().bold()
        };
        output.push_str(&format!("Errors found: {errors}\n"));

        if report.has_errors() {
            output.push('\n');
            output.push_str(&banner("ERRORS"));
            for error in &report.errors {
                output.push_str(&format!(" {} {}\n", "✖".red().bold(), error));
            }
        }
    }
}

impl OutputRenderer for TerminalRenderer {
    fn render(&self, reports: &[LexReport]) -> String {
        if reports.is_empty() {
            return format!("{}", "  ✔ No Go source files found.\n".yellow());
        }

        let mut output = String::new();
        for (i, report) in reports.iter().enumerate() {
            if i > 0 {
                output.push('\n');
            }
            self.render_one(report, &mut output);
        }
        output
    }
}
