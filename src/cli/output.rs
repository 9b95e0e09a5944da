//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{HelpdeskArgs, OutputFormat};
use crate::error::Result;

/// Result structure for training.
#[derive(Debug, Serialize, Deserialize)]
pub struct TrainingResult {
    pub model_path: String,
    pub training_examples: usize,
    pub intents: usize,
    pub features: usize,
    pub iterations: usize,
    pub final_loss: f64,
    pub converged: bool,
    pub duration_ms: u64,
}

/// Result structure for a prediction.
#[derive(Debug, Serialize, Deserialize)]
pub struct PredictionResult {
    pub text: String,
    pub intent: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub probabilities: Option<Vec<IntentProbability>>,
}

/// Probability of one intent.
#[derive(Debug, Serialize, Deserialize)]
pub struct IntentProbability {
    pub intent: String,
    pub probability: f64,
}

/// Result structure for a catalog lookup.
#[derive(Debug, Serialize, Deserialize)]
pub struct ResponseResult {
    pub intent: String,
    pub role: String,
    pub language: String,
    pub response: String,
}

/// Training-set accuracy.
#[derive(Debug, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub total_examples: usize,
    pub correct: usize,
    pub accuracy: f64,
    pub per_intent: Vec<IntentAccuracy>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<Misclassification>,
    pub duration_ms: u64,
}

/// Accuracy for the examples of one intent.
#[derive(Debug, Serialize, Deserialize)]
pub struct IntentAccuracy {
    pub intent: String,
    pub examples: usize,
    pub correct: usize,
}

/// A training example the model gets wrong.
#[derive(Debug, Serialize, Deserialize)]
pub struct Misclassification {
    pub text: String,
    pub expected: String,
    pub predicted: String,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &HelpdeskArgs) -> Result<()> {
    let rendered = render_result(
        message,
        result,
        args.output_format,
        args.pretty,
        args.verbosity(),
    )?;
    println!("{rendered}");
    Ok(())
}

/// Render a result without printing it.
pub fn render_result<T: Serialize>(
    message: &str,
    result: &T,
    format: OutputFormat,
    pretty: bool,
    verbosity: u8,
) -> Result<String> {
    match format {
        OutputFormat::Human => render_human(message, result, verbosity),
        OutputFormat::Json => render_json(result, pretty),
    }
}

fn render_human<T: Serialize>(message: &str, result: &T, verbosity: u8) -> Result<String> {
    let value = serde_json::to_value(result)?;
    let mut lines = Vec::new();

    if verbosity > 1 {
        lines.push(message.to_string());
        lines.push("═".repeat(message.chars().count()));
    }

    match &value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                push_field(&mut lines, key, val);
            }
        }
        _ => lines.push(format_value(&value)),
    }

    Ok(lines.join("\n"))
}

fn push_field(lines: &mut Vec<String>, key: &str, value: &serde_json::Value) {
    match value {
        serde_json::Value::String(s) if s.contains('\n') => {
            lines.push(format!("{key}:"));
            lines.extend(s.lines().map(|line| format!("  {line}")));
        }
        serde_json::Value::Array(items) if !items.is_empty() => {
            lines.push(format!("{key}:"));
            for (i, item) in items.iter().enumerate() {
                let number = i + 1;
                let formatted = format_value(item);
                lines.push(format!("  {number}. {formatted}"));
            }
        }
        _ => {
            let formatted = format_value(value);
            lines.push(format!("{key}: {formatted}"));
        }
    }
}

fn render_json<T: Serialize>(result: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(json)
}

/// Format a JSON value for display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() => format!("{f:.4}"),
            _ => n.to_string(),
        },
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(obj) => obj
            .iter()
            .map(|(k, v)| format!("{k}={}", format_value(v)))
            .collect::<Vec<_>>()
            .join(", "),
        serde_json::Value::Null => "null".to_string(),
    }
}
