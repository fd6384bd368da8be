//! Output formatting utilities for the CLI.

use serde::Serialize;

pub trait CommandOutput: Serialize {
    fn to_human(&self) -> String;

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub fn output<T: CommandOutput>(result: &T, json_mode: bool) {
    if json_mode {
        let json = result.to_json();
        let body = serde_json::to_string_pretty(&json).unwrap_or_default();
        println!("{body}");
    } else {
        println!("{}", result.to_human());
    }
}

/// Join label names for human output, `(none)` when empty.
pub fn label_list(labels: &[String]) -> String {
    if labels.is_empty() {
        "(none)".to_string()
    } else {
        labels.join(", ")
    }
}
