//! User-facing notifications and confirmation prompts

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::{self, BufRead, Write};
use std::sync::Mutex;
use tokio::runtime::{Handle, RuntimeFlavor};
use tokio::task;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
    pub at: DateTime<Utc>,
}

impl Notification {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            at: Utc::now(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }
}

/// Reports outcomes to the user and asks for confirmation of destructive actions
pub trait Prompter: Send + Sync {
    fn notify(&self, notification: Notification);

    fn confirm(&self, question: &str) -> bool;
}

/// Terminal prompter used by the CLI
pub struct ConsolePrompter {
    assume_yes: bool,
}

impl ConsolePrompter {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Prompter for ConsolePrompter {
    fn notify(&self, notification: Notification) {
        let line = format!("[{}] {}", notification.severity, notification.message);
        match notification.severity {
            Severity::Error | Severity::Warning => eprintln!("{}", line),
            Severity::Info | Severity::Success => println!("{}", line),
        }
    }

    fn confirm(&self, question: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        print!("{} [y/N] ", question);
        if io::stdout().flush().is_err() {
            return false;
        }

        // Reading stdin blocks; move off the async worker when there is one
        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                task::block_in_place(read_answer)
            }
            _ => read_answer(),
        }
    }
}

fn read_answer() -> bool {
    let mut answer = String::new();
    match io::stdin().lock().read_line(&mut answer) {
        Ok(_) => is_yes(&answer),
        Err(e) => {
            tracing::warn!("Failed to read confirmation: {}", e);
            false
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Keeps every notification in memory and answers confirmations with a fixed value
pub struct MemoryPrompter {
    answer: bool,
    notifications: Mutex<Vec<Notification>>,
    questions: Mutex<Vec<String>>,
}

impl MemoryPrompter {
    pub fn new(answer: bool) -> Self {
        Self {
            answer,
            notifications: Mutex::new(Vec::new()),
            questions: Mutex::new(Vec::new()),
        }
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications
            .lock()
            .map(|n| n.clone())
            .unwrap_or_default()
    }

    pub fn questions(&self) -> Vec<String> {
        self.questions.lock().map(|q| q.clone()).unwrap_or_default()
    }

    pub fn last(&self) -> Option<Notification> {
        self.notifications().pop()
    }
}

impl Prompter for MemoryPrompter {
    fn notify(&self, notification: Notification) {
        if let Ok(mut list) = self.notifications.lock() {
            list.push(notification);
        }
    }

    fn confirm(&self, question: &str) -> bool {
        if let Ok(mut list) = self.questions.lock() {
            list.push(question.to_string());
        }
        self.answer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_prompter_records() {
        let prompter = MemoryPrompter::new(false);
        prompter.notify(Notification::warning("Please enter a search term"));
        assert!(!prompter.confirm("Delete?"));

        let last = prompter.last().unwrap();
        assert_eq!(last.severity, Severity::Warning);
        assert_eq!(last.message, "Please enter a search term");
        assert_eq!(prompter.questions(), vec!["Delete?".to_string()]);
    }

    #[test]
    fn test_console_answers() {
        assert!(is_yes("y\n"));
        assert!(is_yes(" YES "));
        assert!(!is_yes("\n"));
        assert!(!is_yes("nope"));
    }

    #[test]
    fn test_console_assume_yes_skips_stdin() {
        assert!(ConsolePrompter::new(true).confirm("Delete?"));
    }

    #[test]
    fn test_severity_serializes_lowercase() {
        let json = serde_json::to_value(Notification::success("ok")).unwrap();
        assert_eq!(json["severity"], "success");
        assert_eq!(json["message"], "ok");
    }
}
