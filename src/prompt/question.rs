//! Questions asked by [`QuestionHelper`](crate::QuestionHelper)
//!
//! A question carries its prompt text, a default answer substituted for
//! empty input, and optional normalizer and validator functions. The
//! attempt budget only matters when a validator is set.

use std::fmt;

use anyhow::bail;

/// Transforms a raw (or defaulted) answer before it is returned
pub type Normalizer = Box<dyn Fn(String) -> String>;

/// Accepts an answer, possibly rewriting it, or rejects it with a reason
pub type Validator = Box<dyn Fn(String) -> anyhow::Result<String>>;

/// A prompt plus the rules for interpreting its answer
pub struct Question {
    prompt: String,
    default: String,
    normalizer: Option<Normalizer>,
    validator: Option<Validator>,
    max_attempts: u32,
}

impl Question {
    /// Question with no default, normalizer or validator, and one attempt
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            default: String::new(),
            normalizer: None,
            validator: None,
            max_attempts: 1,
        }
    }

    /// Question that only accepts one of `choices`
    #[must_use]
    pub fn choice<S: AsRef<str>>(prompt: impl Into<String>, choices: &[S]) -> Self {
        let choices: Vec<String> = choices.iter().map(|c| c.as_ref().to_string()).collect();
        Self::new(prompt).with_validator(move |answer| {
            if choices.contains(&answer) {
                return Ok(answer);
            }
            bail!(
                "Value \"{answer}\" is invalid. Expected one of ({})",
                choices.join(", ")
            )
        })
    }

    /// Yes/no question; answers normalize to `"yes"` or `"no"`
    #[must_use]
    pub fn confirmation(prompt: impl Into<String>, default: bool) -> Self {
        Self::new(prompt)
            .with_default(if default { "yes" } else { "no" })
            .with_normalizer(|answer| {
                let answer = answer.trim().to_ascii_lowercase();
                if answer == "y" || answer == "yes" {
                    "yes".to_string()
                } else {
                    "no".to_string()
                }
            })
    }

    /// Answer used when the input line is empty
    #[must_use]
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = default.into();
        self
    }

    /// Set the normalizer
    #[must_use]
    pub fn with_normalizer(mut self, normalizer: impl Fn(String) -> String + 'static) -> Self {
        self.normalizer = Some(Box::new(normalizer));
        self
    }

    /// Set the validator
    #[must_use]
    pub fn with_validator(
        mut self,
        validator: impl Fn(String) -> anyhow::Result<String> + 'static,
    ) -> Self {
        self.validator = Some(Box::new(validator));
        self
    }

    /// Set the attempt budget used when validating
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Prompt text written before reading
    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Default answer
    #[must_use]
    pub fn default_answer(&self) -> &str {
        &self.default
    }

    /// Normalizer, if any
    #[must_use]
    pub fn normalizer(&self) -> Option<&Normalizer> {
        self.normalizer.as_ref()
    }

    /// Validator, if any
    #[must_use]
    pub fn validator(&self) -> Option<&Validator> {
        self.validator.as_ref()
    }

    /// Remaining attempts
    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Spend one attempt
    pub fn reduce_max_attempts(&mut self) {
        self.max_attempts = self.max_attempts.saturating_sub(1);
    }
}

impl fmt::Debug for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Question")
            .field("prompt", &self.prompt)
            .field("default", &self.default)
            .field("normalizer", &self.normalizer.is_some())
            .field("validator", &self.validator.is_some())
            .field("max_attempts", &self.max_attempts)
            .finish()
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.prompt)
    }
}
