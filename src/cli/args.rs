//! Command line argument parsing for the helpdesk CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// helpdesk - bilingual help-desk assistant
#[derive(Parser, Debug, Clone)]
#[command(name = "helpdesk")]
#[command(about = "Classify help-desk issues and walk users through a bilingual dialogue")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct HelpdeskArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Configuration file (JSON)
    #[arg(long, env = "HELPDESK_CONFIG", value_name = "CONFIG_FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Intents document; overrides the configured data path
    #[arg(long, env = "HELPDESK_DATA", value_name = "DATA_FILE", global = true)]
    pub data: Option<PathBuf>,

    /// Model snapshot to load instead of training at startup
    #[arg(long, env = "HELPDESK_MODEL", value_name = "MODEL_FILE", global = true)]
    pub model: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl HelpdeskArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Train a model and save a snapshot of it
    Train(TrainArgs),

    /// Predict the intent of an issue description
    Predict(PredictArgs),

    /// Look up a catalog response
    Respond(RespondArgs),

    /// Answer a single dialogue turn
    Turn(TurnArgs),

    /// Walk through the dialogue interactively
    Chat(ChatArgs),

    /// Measure accuracy on the training examples
    Evaluate(EvaluateArgs),
}

/// Arguments for training
#[derive(Parser, Debug, Clone)]
pub struct TrainArgs {
    /// Where to write the model snapshot
    #[arg(short, long, value_name = "MODEL_FILE")]
    pub output: PathBuf,
}

/// Arguments for prediction
#[derive(Parser, Debug, Clone)]
pub struct PredictArgs {
    /// Issue description
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Also print the probability of every intent
    #[arg(long)]
    pub probabilities: bool,
}

/// Arguments for a catalog lookup
#[derive(Parser, Debug, Clone)]
pub struct RespondArgs {
    /// Intent label
    #[arg(long)]
    pub intent: String,

    /// User role (Student or Employee)
    #[arg(long)]
    pub role: String,

    /// Language code
    #[arg(long, default_value = "EN")]
    pub language: String,
}

/// Arguments for a dialogue turn
#[derive(Parser, Debug, Clone)]
pub struct TurnArgs {
    /// Action name, canonical or localized
    #[arg(long)]
    pub action: String,

    /// Language code
    #[arg(long, default_value = "EN")]
    pub language: String,

    /// Declared role
    #[arg(long)]
    pub user_type: Option<String>,

    /// Issue description
    #[arg(long)]
    pub issue: Option<String>,
}

/// Arguments for the interactive dialogue
#[derive(Parser, Debug, Clone)]
pub struct ChatArgs {
    /// Skip the language question and use this one
    #[arg(long)]
    pub language: Option<String>,
}

/// Arguments for evaluation
#[derive(Parser, Debug, Clone)]
pub struct EvaluateArgs {
    /// List every misclassified example
    #[arg(long)]
    pub show_errors: bool,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_turn_command() {
        let args = HelpdeskArgs::try_parse_from([
            "helpdesk",
            "turn",
            "--action",
            "set_user_type",
            "--language",
            "LT",
            "--user-type",
            "studentas",
        ])
        .unwrap();

        if let Command::Turn(turn_args) = args.command {
            assert_eq!(turn_args.action, "set_user_type");
            assert_eq!(turn_args.language, "LT");
            assert_eq!(turn_args.user_type.as_deref(), Some("studentas"));
            assert!(turn_args.issue.is_none());
        } else {
            panic!("Expected Turn command");
        }
    }

    #[test]
    fn test_train_command() {
        let args = HelpdeskArgs::try_parse_from([
            "helpdesk",
            "--data",
            "intents.json",
            "train",
            "--output",
            "model.bin",
        ])
        .unwrap();

        assert_eq!(args.data, Some(PathBuf::from("intents.json")));
        if let Command::Train(train_args) = args.command {
            assert_eq!(train_args.output, PathBuf::from("model.bin"));
        } else {
            panic!("Expected Train command");
        }
    }

    #[test]
    fn test_respond_defaults_to_english() {
        let args = HelpdeskArgs::try_parse_from([
            "helpdesk",
            "respond",
            "--intent",
            "password_issue",
            "--role",
            "Student",
        ])
        .unwrap();

        if let Command::Respond(respond_args) = args.command {
            assert_eq!(respond_args.language, "EN");
        } else {
            panic!("Expected Respond command");
        }
    }

    #[test]
    fn test_verbosity_levels() {
        let args = HelpdeskArgs::try_parse_from(["helpdesk", "evaluate"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args = HelpdeskArgs::try_parse_from(["helpdesk", "-vv", "evaluate"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        let args = HelpdeskArgs::try_parse_from(["helpdesk", "--quiet", "evaluate"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args =
            HelpdeskArgs::try_parse_from(["helpdesk", "predict", "forgot password", "--format", "json"])
                .unwrap();
        assert_eq!(args.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_missing_required_argument() {
        assert!(HelpdeskArgs::try_parse_from(["helpdesk", "turn"]).is_err());
        assert!(HelpdeskArgs::try_parse_from(["helpdesk", "train"]).is_err());
    }
}
