//! In-process page surface: form inputs and table bodies keyed by element id

use std::collections::HashMap;

#[derive(Debug, Default, Clone)]
pub struct Document {
    inputs: HashMap<String, String>,
    tables: HashMap<String, String>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of an input; missing inputs read as empty
    pub fn value(&self, id: &str) -> &str {
        self.inputs.get(id).map(String::as_str).unwrap_or("")
    }

    pub fn set_value(&mut self, id: &str, value: impl Into<String>) {
        self.inputs.insert(id.to_string(), value.into());
    }

    /// Reset the given inputs to empty
    pub fn clear(&mut self, ids: &[&str]) {
        for id in ids {
            self.inputs.insert((*id).to_string(), String::new());
        }
    }

    pub fn inner_html(&self, id: &str) -> &str {
        self.tables.get(id).map(String::as_str).unwrap_or("")
    }

    /// Replace the whole content of a table body
    pub fn set_inner_html(&mut self, id: &str, html: String) {
        self.tables.insert(id.to_string(), html);
    }

    pub fn row_count(&self, id: &str) -> usize {
        self.inner_html(id).matches("<tr>").count()
    }
}
