//! Ask questions over a console channel
//!
//! Without a validator a question is asked once. With a validator it is
//! re-asked until the validator accepts an answer or the question's
//! attempt budget runs out; each rejection is reported on the channel
//! followed by a blank line.

use crate::error::AskError;
use crate::prompt::io::ConsoleIo;
use crate::prompt::question::Question;

/// Asks [`Question`]s over a [`ConsoleIo`] channel
pub struct QuestionHelper<I> {
    io: I,
}

impl<I: ConsoleIo> QuestionHelper<I> {
    /// Create a helper that owns `io`
    pub const fn new(io: I) -> Self {
        Self { io }
    }

    /// Access the channel
    pub fn io_mut(&mut self) -> &mut I {
        &mut self.io
    }

    /// Give back the channel
    pub fn into_inner(self) -> I {
        self.io
    }

    /// Ask `question` and return the accepted answer.
    ///
    /// Validation failures never escape as-is: they drive the retry loop and,
    /// once the budget is spent, come back as [`AskError::Exhausted`]. At
    /// least one attempt is made even if the budget is already zero. Channel
    /// errors abort immediately as [`AskError::Io`].
    pub fn ask(&mut self, question: &mut Question) -> Result<String, AskError> {
        if question.validator().is_none() {
            return self.ask_once(question);
        }

        let mut attempts = 0;
        loop {
            let answer = self.ask_once(question)?;
            attempts += 1;

            let Some(validator) = question.validator() else {
                return Ok(answer);
            };
            match validator(answer) {
                Ok(accepted) => return Ok(accepted),
                Err(err) => {
                    self.io.writeln(&err.to_string())?;
                    self.io.writeln("")?;
                    question.reduce_max_attempts();
                    tracing::debug!(
                        attempt = attempts,
                        remaining = question.max_attempts(),
                        error = %err,
                        "answer rejected"
                    );
                    if question.max_attempts() == 0 {
                        tracing::warn!(attempts, "no valid answer within attempt budget");
                        return Err(AskError::Exhausted {
                            attempts,
                            last: err,
                        });
                    }
                }
            }
        }
    }

    /// Write the prompt, read a line, substitute the default and normalize
    fn ask_once(&mut self, question: &Question) -> Result<String, AskError> {
        self.io.write(question.prompt())?;
        let mut answer = self.io.read()?;
        if answer.is_empty() {
            answer = question.default_answer().to_string();
        }
        Ok(match question.normalizer() {
            Some(normalize) => normalize(answer),
            None => answer,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    use anyhow::bail;

    /// Scripted channel recording every write
    #[derive(Default)]
    struct FakeIo {
        inputs: Vec<&'static str>,
        writes: Vec<String>,
        fail_reads: bool,
    }

    impl FakeIo {
        fn with_inputs(inputs: &[&'static str]) -> Self {
            let mut inputs = inputs.to_vec();
            inputs.reverse();
            Self {
                inputs,
                ..Self::default()
            }
        }
    }

    impl ConsoleIo for FakeIo {
        fn write(&mut self, content: &str) -> io::Result<()> {
            self.writes.push(format!("write:{content}"));
            Ok(())
        }

        fn writeln(&mut self, content: &str) -> io::Result<()> {
            self.writes.push(format!("writeln:{content}"));
            Ok(())
        }

        fn read(&mut self) -> io::Result<String> {
            if self.fail_reads {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"));
            }
            Ok(self.inputs.pop().unwrap_or_default().to_string())
        }
    }

    fn min_len(len: usize) -> impl Fn(String) -> anyhow::Result<String> {
        move |answer| {
            if answer.len() < len {
                bail!("'{answer}' is shorter than {len}");
            }
            Ok(answer)
        }
    }

    #[test]
    fn test_empty_input_uses_default() {
        let mut helper = QuestionHelper::new(FakeIo::with_inputs(&[""]));
        let mut question = Question::new("Continue? ").with_default("Y");

        assert_eq!(helper.ask(&mut question).unwrap(), "Y");
        assert_eq!(helper.into_inner().writes, vec!["write:Continue? "]);
    }

    #[test]
    fn test_default_is_normalized() {
        let mut helper = QuestionHelper::new(FakeIo::with_inputs(&[""]));
        let mut question = Question::new("?")
            .with_default("y")
            .with_normalizer(|a| a.to_uppercase());

        assert_eq!(helper.ask(&mut question).unwrap(), "Y");
    }

    #[test]
    fn test_input_is_normalized() {
        let mut helper = QuestionHelper::new(FakeIo::with_inputs(&["  padded  "]));
        let mut question = Question::new("?").with_normalizer(|a| a.trim().to_string());

        assert_eq!(helper.ask(&mut question).unwrap(), "padded");
    }

    #[test]
    fn test_always_failing_validator_exhausts_budget() {
        let mut helper = QuestionHelper::new(FakeIo::with_inputs(&["a", "b"]));
        let mut question = Question::new("Name: ")
            .with_validator(min_len(3))
            .with_max_attempts(2);

        let err = helper.ask(&mut question).unwrap_err();

        match err {
            AskError::Exhausted { attempts, last } => {
                assert_eq!(attempts, 2);
                assert_eq!(last.to_string(), "'b' is shorter than 3");
            }
            AskError::Io(e) => panic!("unexpected I/O error: {e}"),
        }
        assert_eq!(question.max_attempts(), 0);
        assert_eq!(
            helper.into_inner().writes,
            vec![
                "write:Name: ",
                "writeln:'a' is shorter than 3",
                "writeln:",
                "write:Name: ",
                "writeln:'b' is shorter than 3",
                "writeln:",
            ]
        );
    }

    #[test]
    fn test_validator_succeeds_on_second_attempt() {
        let mut helper = QuestionHelper::new(FakeIo::with_inputs(&["ab", "abcd"]));
        let mut question = Question::new("Name: ")
            .with_validator(|a| {
                if a.len() < 3 {
                    bail!("too short");
                }
                Ok(format!("<{a}>"))
            })
            .with_max_attempts(5);

        assert_eq!(helper.ask(&mut question).unwrap(), "<abcd>");
        assert_eq!(question.max_attempts(), 4);

        let writes = helper.into_inner().writes;
        let failures = writes.iter().filter(|w| *w == "writeln:too short").count();
        assert_eq!(failures, 1);
    }

    #[test]
    fn test_validator_sees_default_answer() {
        let mut helper = QuestionHelper::new(FakeIo::with_inputs(&[""]));
        let mut question = Question::new("?")
            .with_default("fallback")
            .with_validator(min_len(3));

        assert_eq!(helper.ask(&mut question).unwrap(), "fallback");
    }

    #[test]
    fn test_zero_budget_still_asks_once() {
        let mut helper = QuestionHelper::new(FakeIo::with_inputs(&["x", "y"]));
        let mut question = Question::new("?")
            .with_validator(min_len(3))
            .with_max_attempts(0);

        let err = helper.ask(&mut question).unwrap_err();

        assert!(matches!(err, AskError::Exhausted { attempts: 1, .. }));
    }

    #[test]
    fn test_channel_failure_propagates() {
        let io = FakeIo {
            fail_reads: true,
            ..FakeIo::default()
        };
        let mut helper = QuestionHelper::new(io);
        let mut question = Question::new("?")
            .with_validator(min_len(1))
            .with_max_attempts(3);

        let err = helper.ask(&mut question).unwrap_err();

        assert!(matches!(err, AskError::Io(ref e) if e.kind() == io::ErrorKind::BrokenPipe));
        assert_eq!(question.max_attempts(), 3);
    }
}
