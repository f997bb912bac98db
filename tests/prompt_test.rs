#![allow(missing_docs)]

use std::io::Cursor;

use anyhow::bail;

use tinter::{AskError, Question, QuestionHelper, StreamIo};

type Scripted = StreamIo<Cursor<Vec<u8>>, Vec<u8>>;

fn helper(input: &str) -> QuestionHelper<Scripted> {
    QuestionHelper::new(StreamIo::new(Cursor::new(input.as_bytes().to_vec()), Vec::new()))
}

fn output(helper: QuestionHelper<Scripted>) -> String {
    let (_, out) = helper.into_inner().into_parts();
    String::from_utf8(out).unwrap()
}

fn port(answer: String) -> anyhow::Result<String> {
    match answer.parse::<u16>() {
        Ok(0) | Err(_) => bail!("'{answer}' is not a valid port"),
        Ok(port) => Ok(port.to_string()),
    }
}

/// Empty input falls back to the default with no validator involved.
#[test]
fn test_default_answer_over_real_stream() {
    let mut helper = helper("\n");
    let mut question = Question::new("Overwrite? [Y/n] ").with_default("Y");

    let answer = helper.ask(&mut question).unwrap();

    assert_eq!(answer, "Y");
    assert_eq!(output(helper), "Overwrite? [Y/n] ");
}

/// A validator that rejects twice and then accepts: the transcript shows
/// each rejection followed by a blank line and a fresh prompt.
#[test]
fn test_retry_transcript() {
    let mut helper = helper("http\n0\n8080\n");
    let mut question = Question::new("Port: ")
        .with_validator(port)
        .with_max_attempts(3);

    let answer = helper.ask(&mut question).unwrap();

    assert_eq!(answer, "8080");
    assert_eq!(question.max_attempts(), 1);
    assert_eq!(
        output(helper),
        "Port: 'http' is not a valid port\n\nPort: '0' is not a valid port\n\nPort: "
    );
}

/// Two failed validations with a budget of two: the second error comes back
/// as `Exhausted`, after exactly two prompts and two error messages.
#[test]
fn test_exhausted_budget_returns_last_error() {
    let mut helper = helper("a\nb\nc\n");
    let mut question = Question::new("Port: ")
        .with_validator(port)
        .with_max_attempts(2);

    let err = helper.ask(&mut question).unwrap_err();

    let AskError::Exhausted { attempts, last } = err else {
        panic!("expected exhaustion");
    };
    assert_eq!(attempts, 2);
    assert_eq!(last.to_string(), "'b' is not a valid port");

    let out = output(helper);
    assert_eq!(out.matches("Port: ").count(), 2);
    assert_eq!(out.matches("is not a valid port\n\n").count(), 2);
}

/// Input that ends mid-conversation surfaces as an I/O error, not a
/// validation failure.
#[test]
fn test_closed_input_is_io_error() {
    let mut helper = helper("x\n");
    let mut question = Question::new("Port: ")
        .with_validator(port)
        .with_max_attempts(5);

    let err = helper.ask(&mut question).unwrap_err();

    assert!(matches!(err, AskError::Io(_)));
    assert_eq!(question.max_attempts(), 4);
}

#[test]
fn test_choice_question_retries_until_listed() {
    let mut helper = helper("purple\nblue\n");
    let mut question = Question::choice("Color: ", &["red", "blue"]).with_max_attempts(2);

    assert_eq!(helper.ask(&mut question).unwrap(), "blue");
    assert!(output(helper).contains("Value \"purple\" is invalid. Expected one of (red, blue)\n\n"));
}

#[test]
fn test_confirmation_question() {
    let mut helper = helper("\nYES\nmaybe\n");
    let mut question = Question::confirmation("Proceed? ", true);

    assert_eq!(helper.ask(&mut question).unwrap(), "yes");
    assert_eq!(helper.ask(&mut question).unwrap(), "yes");
    assert_eq!(helper.ask(&mut question).unwrap(), "no");
}
