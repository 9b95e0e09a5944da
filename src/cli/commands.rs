//! Command implementations for the helpdesk CLI.

use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};
use std::time::Instant;

use anyhow::Context;
use log::info;
use rayon::prelude::*;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::HelpdeskConfig;
use crate::context::HelpdeskContext;
use crate::corpus::IntentCorpus;
use crate::dialogue::{Action, Language, TurnResult};
use crate::error::Result;
use crate::ml::intent_classifier::{
    IntentClassifier, LogRegIntentClassifier, ModelSnapshot,
};

/// Execute a CLI command.
pub fn execute_command(args: HelpdeskArgs) -> Result<()> {
    match &args.command {
        Command::Train(train_args) => train(train_args, &args),
        Command::Predict(predict_args) => predict(predict_args, &args),
        Command::Respond(respond_args) => respond(respond_args, &args),
        Command::Turn(turn_args) => turn(turn_args, &args),
        Command::Chat(chat_args) => chat(chat_args, &args),
        Command::Evaluate(evaluate_args) => evaluate(evaluate_args, &args),
    }
}

/// Config file (if any) with the `--data` override applied.
fn load_config(args: &HelpdeskArgs) -> Result<HelpdeskConfig> {
    let mut config = match &args.config {
        Some(path) => HelpdeskConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => HelpdeskConfig::default(),
    };
    if let Some(data) = &args.data {
        config.data_path = data.clone();
    }
    Ok(config)
}

fn load_corpus(config: &HelpdeskConfig) -> Result<IntentCorpus> {
    let corpus = IntentCorpus::load(&config.data_path).with_context(|| {
        format!("failed to load intents from {}", config.data_path.display())
    })?;
    Ok(corpus)
}

/// Build the serving context, from `--model` when given.
fn load_context(args: &HelpdeskArgs) -> Result<(HelpdeskContext, IntentCorpus)> {
    let config = load_config(args)?;
    let corpus = load_corpus(&config)?;

    let context = match &args.model {
        Some(path) => {
            let snapshot = ModelSnapshot::load(path)
                .with_context(|| format!("failed to load model from {}", path.display()))?;
            HelpdeskContext::from_snapshot(snapshot, corpus.catalog())?
        }
        None => HelpdeskContext::train(&corpus, &config.training)
            .context("refusing to serve without a trained model")?,
    };
    Ok((context, corpus))
}

/// Fit a classifier and save its snapshot.
fn train(args: &TrainArgs, cli_args: &HelpdeskArgs) -> Result<()> {
    let config = load_config(cli_args)?;
    let corpus = load_corpus(&config)?;
    let examples = corpus.training_examples();

    let start_time = Instant::now();
    let classifier = LogRegIntentClassifier::fit(&examples, &config.training)?;
    let duration = start_time.elapsed();

    ModelSnapshot::capture(&classifier, examples.len(), &config.training).save(&args.output)?;

    let stats = classifier.training_stats();
    output_result(
        "Model trained",
        &TrainingResult {
            model_path: args.output.to_string_lossy().to_string(),
            training_examples: examples.len(),
            intents: classifier.labels().len(),
            features: classifier.vectorizer().vocabulary_size(),
            iterations: stats.iterations,
            final_loss: stats.final_training_loss,
            converged: stats.converged,
            duration_ms: duration.as_millis() as u64,
        },
        cli_args,
    )
}

/// Predict the intent of one issue description.
fn predict(args: &PredictArgs, cli_args: &HelpdeskArgs) -> Result<()> {
    let (context, _) = load_context(cli_args)?;
    let intent = context.predict_intent(&args.text)?;

    let probabilities = if args.probabilities {
        let probabilities = context
            .predict_proba(&args.text)?
            .into_iter()
            .map(|(intent, probability)| IntentProbability {
                intent,
                probability,
            })
            .collect();
        Some(probabilities)
    } else {
        None
    };

    output_result(
        "Prediction",
        &PredictionResult {
            text: args.text.clone(),
            intent,
            probabilities,
        },
        cli_args,
    )
}

/// Look up a catalog response; no classifier is needed.
fn respond(args: &RespondArgs, cli_args: &HelpdeskArgs) -> Result<()> {
    let config = load_config(cli_args)?;
    let catalog = load_corpus(&config)?.catalog();
    let response = catalog.get_response(&args.intent, &args.role, &args.language);

    output_result(
        "Response",
        &ResponseResult {
            intent: args.intent.clone(),
            role: args.role.clone(),
            language: args.language.clone(),
            response: response.to_string(),
        },
        cli_args,
    )
}

/// Answer one dialogue turn.
fn turn(args: &TurnArgs, cli_args: &HelpdeskArgs) -> Result<()> {
    let (context, _) = load_context(cli_args)?;
    let result = context.handle_turn(
        &args.action,
        &args.language,
        args.user_type.as_deref(),
        args.issue.as_deref(),
    )?;
    output_result("Turn", &result, cli_args)
}

fn chat(args: &ChatArgs, cli_args: &HelpdeskArgs) -> Result<()> {
    let (context, _) = load_context(cli_args)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_chat(
        &context,
        stdin.lock(),
        stdout.lock(),
        args.language.as_deref(),
    )
}

/// Drive the four dialogue stages over a line-oriented terminal.
///
/// An option may be picked by its number or typed out. Invalid answers are
/// reported and asked again. Issues are answered until an empty line or
/// end of input.
pub fn run_chat<R: BufRead, W: Write>(
    context: &HelpdeskContext,
    mut input: R,
    mut output: W,
    language: Option<&str>,
) -> Result<()> {
    let greeting = context.handle_turn(Action::Start.key(), "EN", None, None)?;

    // language
    let (language, roles) = loop {
        let answer = match language {
            Some(language) => language.to_string(),
            None => {
                show(&mut output, &greeting)?;
                match read_answer(&mut input, &mut output, &greeting)? {
                    Some(answer) => answer,
                    None => return Ok(()),
                }
            }
        };
        let result = context.handle_turn(Action::SetLanguage.key(), &answer, None, None)?;
        match Language::parse(&answer) {
            Some(parsed) if !result.is_error() => break (parsed, result),
            _ => {
                show(&mut output, &result)?;
                if language.is_some() {
                    return Ok(());
                }
            }
        }
    };

    // role
    let (user_type, issues) = loop {
        show(&mut output, &roles)?;
        let Some(answer) = read_answer(&mut input, &mut output, &roles)? else {
            return Ok(());
        };
        let result = context.handle_turn(
            Action::SetUserType.alias(language),
            language.code(),
            Some(&answer),
            None,
        )?;
        if result.is_error() {
            show(&mut output, &result)?;
        } else {
            break (answer, result);
        }
    };

    // issues
    show(&mut output, &issues)?;
    loop {
        let Some(issue) = read_answer(&mut input, &mut output, &issues)? else {
            return Ok(());
        };
        if issue.is_empty() {
            return Ok(());
        }
        let result = context.handle_turn(
            Action::ChooseIssue.alias(language),
            language.code(),
            Some(&user_type),
            Some(&issue),
        )?;
        if let TurnResult::Response { intent, .. } = &result {
            info!("chat issue {issue:?} classified as {intent}");
        }
        show(&mut output, &result)?;
    }
}

fn show<W: Write>(output: &mut W, result: &TurnResult) -> Result<()> {
    writeln!(output, "{}", result.text())?;
    if let Some(options) = result.options() {
        for (i, option) in options.iter().enumerate() {
            writeln!(output, "  {}. {option}", i + 1)?;
        }
    }
    Ok(())
}

/// Read one trimmed line; `None` at end of input. A number picks the
/// matching option of `result`.
fn read_answer<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    result: &TurnResult,
) -> Result<Option<String>> {
    write!(output, "> ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let answer = line.trim();

    let picked = answer
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| result.options().and_then(|options| options.get(i)));

    Ok(Some(match picked {
        Some(option) => option.clone(),
        None => answer.to_string(),
    }))
}

/// Accuracy of the served model on the training examples.
fn evaluate(args: &EvaluateArgs, cli_args: &HelpdeskArgs) -> Result<()> {
    let (context, corpus) = load_context(cli_args)?;
    let examples = corpus.training_examples();

    let start_time = Instant::now();
    let predictions = examples
        .par_iter()
        .map(|example| context.predict_intent(&example.text))
        .collect::<Result<Vec<_>>>()?;
    let duration = start_time.elapsed();

    let mut per_intent: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
    let mut errors = Vec::new();
    for (example, predicted) in examples.iter().zip(predictions) {
        let entry = per_intent.entry(example.intent.as_str()).or_default();
        entry.0 += 1;
        if predicted == example.intent {
            entry.1 += 1;
        } else if args.show_errors {
            errors.push(Misclassification {
                text: example.text.clone(),
                expected: example.intent.clone(),
                predicted,
            });
        }
    }

    let correct: usize = per_intent.values().map(|(_, correct)| correct).sum();
    output_result(
        "Evaluation",
        &EvaluationResult {
            total_examples: examples.len(),
            correct,
            accuracy: correct as f64 / examples.len().max(1) as f64,
            per_intent: per_intent
                .into_iter()
                .map(|(intent, (examples, correct))| IntentAccuracy {
                    intent: intent.to_string(),
                    examples,
                    correct,
                })
                .collect(),
            errors,
            duration_ms: duration.as_millis() as u64,
        },
        cli_args,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ml::intent_classifier::TrainingConfig;

    const CORPUS: &str = r#"{
        "intents": [
            {
                "intent": "password_issue",
                "examples": ["forgot my password", "reset password", "pamiršau slaptažodį", "slaptažodis nebetinka"],
                "responses": {
                    "Student": {"EN": "Reset your password.", "LT": "Atkurkite slaptažodį."},
                    "Employee": {"EN": "Call IT."}
                }
            },
            {
                "intent": "microsoft_issue",
                "examples": ["outlook does not open", "teams crashes", "neveikia outlook"],
                "responses": {"Student": {"EN": "Reinstall Office."}}
            }
        ]
    }"#;

    fn context() -> HelpdeskContext {
        let corpus = IntentCorpus::from_json(CORPUS).unwrap();
        HelpdeskContext::train(&corpus, &TrainingConfig::default()).unwrap()
    }

    fn chat_transcript(input: &str, language: Option<&str>) -> String {
        let mut output = Vec::new();
        run_chat(&context(), input.as_bytes(), &mut output, language).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_chat_walkthrough() {
        let transcript = chat_transcript("EN\nstudent\nI forgot my password\n\n", None);

        assert!(transcript.contains("Hi! How can I help you?"));
        assert!(transcript.contains("Please choose your role:"));
        assert!(transcript.contains("  3. Password related issue"));
        assert!(!transcript.contains("2FA issue"));
        assert!(transcript.contains("Reset your password."));
    }

    #[test]
    fn test_chat_numbered_answers_in_lithuanian() {
        // 2 = LT, 1 = Studentas
        let transcript = chat_transcript("2\n1\npamiršau slaptažodį\n", None);

        assert!(transcript.contains("Prašome pasirinkti savo vaidmenį:"));
        assert!(transcript.contains("Su slaptažodžiu susijusi problema"));
        assert!(transcript.contains("Atkurkite slaptažodį."));
    }

    #[test]
    fn test_chat_reasks_after_invalid_answers() {
        let transcript = chat_transcript("FR\nEN\nteacher\nemployee\nforgot password\n", None);

        assert!(transcript.contains("Invalid language choice"));
        assert!(transcript.contains("Invalid user type."));
        assert!(transcript.contains("2FA issue"));
        assert!(transcript.contains("Call IT."));
    }

    #[test]
    fn test_chat_preset_language() {
        let transcript = chat_transcript("darbuotojas\n", Some("LT"));
        assert!(!transcript.contains("Hi! How can I help you?"));
        assert!(transcript.contains("2AF problema"));

        let transcript = chat_transcript("", Some("FR"));
        assert!(transcript.contains("Invalid language choice"));
    }

    #[test]
    fn test_chat_stops_at_end_of_input() {
        let transcript = chat_transcript("", None);
        assert!(transcript.contains("Hi! How can I help you?"));
        assert!(!transcript.contains("Please choose your role:"));
    }
}
