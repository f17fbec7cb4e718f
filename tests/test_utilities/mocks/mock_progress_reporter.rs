use nwdi_dcdef::prelude::*;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Mock ProgressReporter for testing that captures messages
#[derive(Default, Clone)]
pub struct MockProgressReporter {
    pub messages: Arc<Mutex<Vec<String>>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    fn push(&self, message: String) {
        self.messages.lock().unwrap().push(message);
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.push(message.to_string());
    }

    fn report_progress(&self, current: usize, total: usize, descriptor: Option<&Path>) {
        match descriptor {
            Some(path) => self.push(format!("Progress: {}/{} - {}", current, total, path.display())),
            None => self.push(format!("Progress: {}/{}", current, total)),
        }
    }

    fn report_skipped(&self, descriptor: &Path, reason: &str) {
        self.push(format!("Skipped: {} - {}", descriptor.display(), reason));
    }

    fn report_completion(&self, message: &str) {
        self.push(format!("Completed: {}", message));
    }
}
