//! Punctuation segmentation and restoration.
//!
//! Phonemizers drop punctuation, yet the acoustic model uses it for pauses and
//! prosody. [`Punctuator::strip_to_restore`] cuts text into punctuation-free
//! segments plus a list of punctuation runs; once every segment has been
//! transformed (usually phonemized) [`Punctuator::restore`] splices the runs
//! back in their original places.
use std::collections::VecDeque;

use lazy_static::lazy_static;
use regex::Regex;

use crate::engine::config::DEFAULT_PUNCTUATIONS;
use crate::engine::error::{FrontendError, Result};

lazy_static! {
    static ref DEFAULT_PATTERN: Regex =
        Regex::new(&pattern_source(DEFAULT_PUNCTUATIONS)).unwrap();
}

/// Where a punctuation run sits relative to the text around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// First run, and the text starts with it
    Begin,
    /// Last run, and the text ends with it
    End,
    /// Between two segments
    Middle,
    /// The whole text is this single run
    Alone,
}

/// A maximal match of punctuation with the whitespace around it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PunctuationRun {
    /// Matched text, verbatim
    pub text: String,
    pub position: Position,
    /// Byte offset of the match in the source text
    pub start: usize,
}

impl PunctuationRun {
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }
}

#[derive(Debug, Clone)]
pub struct Punctuator {
    punctuations: String,
    pattern: Option<Regex>,
}

impl Punctuator {
    pub fn new(punctuations: &str) -> Result<Self> {
        let punctuations = dedup_chars(punctuations);
        let pattern = compile_pattern(&punctuations)?;
        Ok(Self {
            punctuations,
            pattern,
        })
    }

    pub fn punctuations(&self) -> &str {
        &self.punctuations
    }

    pub fn set_punctuations(&mut self, punctuations: &str) -> Result<()> {
        let punctuations = dedup_chars(punctuations);
        self.pattern = compile_pattern(&punctuations)?;
        self.punctuations = punctuations;
        Ok(())
    }

    /// Replaces every punctuation run with a single space and trims the result.
    pub fn strip(&self, text: &str) -> String {
        match &self.pattern {
            Some(pattern) => pattern.replace_all(text, " ").trim().to_string(),
            None => text.trim().to_string(),
        }
    }

    /// Splits `text` into punctuation-free segments and the runs between them.
    ///
    /// Feeding both halves unchanged to [`Punctuator::restore`] gives back `text`.
    /// A run at the very start of the text does not open an empty segment; it is
    /// glued to the front of the first segment on restore instead.
    pub fn strip_to_restore(&self, text: &str) -> (Vec<String>, Vec<PunctuationRun>) {
        let matches: Vec<_> = match &self.pattern {
            Some(pattern) => pattern.find_iter(text).collect(),
            None => Vec::new(),
        };

        if matches.is_empty() {
            return (vec![text.to_string()], Vec::new());
        }

        if matches.len() == 1 && matches[0].as_str() == text {
            let run = PunctuationRun {
                text: text.to_string(),
                position: Position::Alone,
                start: 0,
            };
            return (Vec::new(), vec![run]);
        }

        let last = matches.len() - 1;
        let mut segments = Vec::with_capacity(matches.len() + 1);
        let mut runs = Vec::with_capacity(matches.len());
        let mut cursor = 0;

        for (index, found) in matches.iter().enumerate() {
            let position = if index == 0 && found.start() == 0 {
                Position::Begin
            } else if index == last && found.end() == text.len() {
                Position::End
            } else {
                Position::Middle
            };

            if position != Position::Begin {
                segments.push(text[cursor..found.start()].to_string());
            }
            runs.push(PunctuationRun {
                text: found.as_str().to_string(),
                position,
                start: found.start(),
            });
            cursor = found.end();
        }

        if cursor < text.len() {
            segments.push(text[cursor..].to_string());
        }

        log::trace!(
            "strip_to_restore: {} segment(s), {} run(s)",
            segments.len(),
            runs.len()
        );
        (segments, runs)
    }

    /// Re-interleaves transformed segments with the runs from [`Punctuator::strip_to_restore`].
    ///
    /// Segments must keep the count and order they were produced with.
    pub fn restore<S: AsRef<str>>(segments: &[S], runs: &[PunctuationRun]) -> Result<String> {
        let mut pending: VecDeque<String> = segments
            .iter()
            .map(|segment| segment.as_ref().to_string())
            .collect();
        let mut restored = String::new();

        for (run_index, run) in runs.iter().enumerate() {
            let inconsistent = |segments_left: usize| FrontendError::InconsistentRestore {
                run_index,
                position: run.position,
                segments_left,
            };

            match run.position {
                Position::Begin => {
                    let first = pending.front_mut().ok_or_else(|| inconsistent(0))?;
                    first.insert_str(0, &run.text);
                }
                Position::End => {
                    let first = pending.pop_front().ok_or_else(|| inconsistent(0))?;
                    restored.push_str(&first);
                    restored.push_str(&run.text);
                }
                Position::Alone => restored.push_str(&run.text),
                Position::Middle => match pending.len() {
                    0 => return Err(inconsistent(0)),
                    1 => pending[0].push_str(&run.text),
                    _ => {
                        let right = pending.remove(1).unwrap_or_default();
                        pending[0].push_str(&run.text);
                        pending[0].push_str(&right);
                    }
                },
            }
        }

        for segment in pending {
            restored.push_str(&segment);
        }
        Ok(restored)
    }
}

impl Default for Punctuator {
    fn default() -> Self {
        Self {
            punctuations: DEFAULT_PUNCTUATIONS.to_string(),
            pattern: Some(DEFAULT_PATTERN.clone()),
        }
    }
}

fn dedup_chars(text: &str) -> String {
    let mut seen = String::with_capacity(text.len());
    for c in text.chars() {
        if !seen.contains(c) {
            seen.push(c);
        }
    }
    seen
}

// One or more punctuation characters with surrounding whitespace; adjacent
// occurrences merge into a single run.
fn pattern_source(punctuations: &str) -> String {
    format!(r"(?:\s*[{}]+\s*)+", regex::escape(punctuations))
}

fn compile_pattern(punctuations: &str) -> Result<Option<Regex>> {
    if punctuations.is_empty() {
        return Ok(None);
    }
    let source = pattern_source(punctuations);
    log::debug!("compiling punctuation pattern {}", source);
    Regex::new(&source)
        .map(Some)
        .map_err(|e| FrontendError::InvalidPunctuation(e.to_string()))
}
