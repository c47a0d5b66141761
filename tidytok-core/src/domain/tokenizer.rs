//! Segmentation of an assembled text into tokens of a chosen granularity.
//!
//! Every segmenter reports byte ranges into the text it was given, so tokens
//! can be traced back to the rows that produced them. Case normalisation only
//! touches the token text, never the ranges.

use crate::error::ConfigError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::ops::Range;
use unicode_segmentation::UnicodeSegmentation;

/// Unit of tokenization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Granularity {
    /// Unicode words; punctuation and whitespace dropped
    #[default]
    Word,
    /// Contiguous windows of `n` words
    Ngram {
        /// Window size
        n: usize,
    },
    /// Every window size from `min` to `max` inclusive
    NgramRange {
        /// Smallest window size
        min: usize,
        /// Largest window size
        max: usize,
    },
    /// Sentences ending in `.`, `!` or `?`
    Sentence,
    /// Individual non-whitespace characters
    Character,
    /// Contiguous windows of `n` non-whitespace characters
    CharacterShingles {
        /// Window size
        n: usize,
    },
    /// Lines of text
    Line,
    /// Blocks separated by blank lines
    Paragraph,
    /// Pieces between matches of a pattern
    Regex {
        /// Separator pattern
        pattern: String,
    },
}

impl Granularity {
    /// Shorthand for `Granularity::Ngram { n }`.
    pub fn ngram(n: usize) -> Self {
        Granularity::Ngram { n }
    }

    /// Short name used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Granularity::Word => "word",
            Granularity::Ngram { .. } => "ngram",
            Granularity::NgramRange { .. } => "ngram_range",
            Granularity::Sentence => "sentence",
            Granularity::Character => "character",
            Granularity::CharacterShingles { .. } => "character_shingles",
            Granularity::Line => "line",
            Granularity::Paragraph => "paragraph",
            Granularity::Regex { .. } => "regex",
        }
    }

    /// Check numeric parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |reason: &str| ConfigError::InvalidGranularityParameter {
            granularity: self.name(),
            reason: reason.to_string(),
        };

        match *self {
            Granularity::Ngram { n } | Granularity::CharacterShingles { n } if n < 1 => {
                Err(invalid("n must be at least 1"))
            }
            Granularity::NgramRange { min, .. } if min < 1 => Err(invalid("min must be at least 1")),
            Granularity::NgramRange { min, max } if min > max => {
                Err(invalid("min must not exceed max"))
            }
            _ => Ok(()),
        }
    }
}

/// A token candidate: its text and byte range in the segmented text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Token text, case-normalised if requested
    pub text: String,
    /// Half-open byte range in the source text
    pub range: Range<usize>,
}

#[derive(Debug, Clone)]
enum Kind {
    Word,
    Ngram { min: usize, max: usize },
    Sentence,
    Character,
    Shingles(usize),
    Line,
    Paragraph,
    Regex(Regex),
}

/// A validated, ready-to-run segmenter for one granularity.
#[derive(Debug, Clone)]
pub struct Segmenter {
    kind: Kind,
    lowercase: bool,
}

impl Segmenter {
    /// Build a segmenter, validating parameters and compiling patterns.
    pub fn new(granularity: &Granularity, lowercase: bool) -> Result<Self, ConfigError> {
        granularity.validate()?;

        let kind = match granularity {
            Granularity::Word => Kind::Word,
            Granularity::Ngram { n } => Kind::Ngram { min: *n, max: *n },
            Granularity::NgramRange { min, max } => Kind::Ngram {
                min: *min,
                max: *max,
            },
            Granularity::Sentence => Kind::Sentence,
            Granularity::Character => Kind::Character,
            Granularity::CharacterShingles { n } => Kind::Shingles(*n),
            Granularity::Line => Kind::Line,
            Granularity::Paragraph => Kind::Paragraph,
            Granularity::Regex { pattern } => {
                let re = Regex::new(pattern).map_err(|e| ConfigError::InvalidPattern {
                    pattern: pattern.clone(),
                    reason: e.to_string(),
                })?;
                Kind::Regex(re)
            }
        };

        Ok(Self { kind, lowercase })
    }

    /// Split `text` into segments, in text order.
    pub fn segment(&self, text: &str) -> Vec<Segment> {
        match &self.kind {
            Kind::Word => self.slices(text, word_ranges(text)),
            Kind::Ngram { min, max } => self.ngrams(text, *min, *max),
            Kind::Sentence => self.slices(text, sentence_ranges(text)),
            Kind::Character => self.slices(text, char_ranges(text)),
            Kind::Shingles(n) => self.shingles(text, *n),
            Kind::Line => self.slices(text, split_ranges(text, newline_ranges(text))),
            Kind::Paragraph => self.slices(text, paragraph_ranges(text)),
            Kind::Regex(re) => {
                self.slices(text, split_ranges(text, re.find_iter(text).map(|m| m.range())))
            }
        }
    }

    fn normalise(&self, s: String) -> String {
        if self.lowercase {
            s.to_lowercase()
        } else {
            s
        }
    }

    fn slices(&self, text: &str, ranges: Vec<Range<usize>>) -> Vec<Segment> {
        ranges
            .into_iter()
            .map(|range| Segment {
                text: self.normalise(text[range.clone()].to_string()),
                range,
            })
            .collect()
    }

    fn ngrams(&self, text: &str, min: usize, max: usize) -> Vec<Segment> {
        let words = word_ranges(text);
        let mut out = Vec::new();

        for start in 0..words.len() {
            let remaining = words.len() - start;
            for n in min..=max {
                if n > remaining {
                    break;
                }
                let window = &words[start..start + n];
                let joined = window
                    .iter()
                    .map(|r| &text[r.clone()])
                    .collect::<Vec<_>>()
                    .join(" ");
                out.push(Segment {
                    text: self.normalise(joined),
                    range: window[0].start..window[n - 1].end,
                });
            }
        }

        out
    }

    fn shingles(&self, text: &str, n: usize) -> Vec<Segment> {
        let chars: Vec<(usize, char)> = text
            .char_indices()
            .filter(|(_, c)| !c.is_whitespace())
            .collect();

        chars
            .windows(n)
            .map(|window| {
                let (first, _) = window[0];
                let (last, last_char) = window[n - 1];
                Segment {
                    text: self.normalise(window.iter().map(|(_, c)| c).collect()),
                    range: first..last + last_char.len_utf8(),
                }
            })
            .collect()
    }
}

fn word_ranges(text: &str) -> Vec<Range<usize>> {
    text.unicode_word_indices()
        .map(|(i, w)| i..i + w.len())
        .collect()
}

fn char_ranges(text: &str) -> Vec<Range<usize>> {
    text.char_indices()
        .filter(|(_, c)| !c.is_whitespace())
        .map(|(i, c)| i..i + c.len_utf8())
        .collect()
}

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

fn is_closer(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '”' | '’' | '»')
}

/// Shrink a range to exclude surrounding whitespace; `None` if nothing is left.
fn trimmed(text: &str, range: Range<usize>) -> Option<Range<usize>> {
    let piece = &text[range.clone()];
    let lead = piece.len() - piece.trim_start().len();
    if lead == piece.len() {
        return None;
    }
    let trail = piece.len() - piece.trim_end().len();
    Some(range.start + lead..range.end - trail)
}

fn sentence_ranges(text: &str) -> Vec<Range<usize>> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !is_terminator(c) {
            continue;
        }

        let mut end = i + c.len_utf8();
        while let Some(&(j, next)) = chars.peek() {
            if is_terminator(next) || is_closer(next) {
                end = j + next.len_utf8();
                chars.next();
            } else {
                break;
            }
        }

        let at_boundary = chars.peek().map_or(true, |&(_, next)| next.is_whitespace());
        if at_boundary {
            out.extend(trimmed(text, start..end));
            start = end;
        }
    }

    out.extend(trimmed(text, start..text.len()));
    out
}

fn newline_ranges(text: &str) -> impl Iterator<Item = Range<usize>> + '_ {
    text.match_indices('\n').map(|(i, s)| i..i + s.len())
}

/// Pieces between separator ranges, trimmed, empty pieces dropped.
fn split_ranges<I>(text: &str, separators: I) -> Vec<Range<usize>>
where
    I: Iterator<Item = Range<usize>>,
{
    let mut out = Vec::new();
    let mut start = 0;
    for sep in separators {
        out.extend(trimmed(text, start..sep.start));
        start = sep.end;
    }
    out.extend(trimmed(text, start..text.len()));
    out
}

fn paragraph_ranges(text: &str) -> Vec<Range<usize>> {
    let mut out = Vec::new();
    let mut current: Option<Range<usize>> = None;
    let mut line_start = 0;

    let line_ends = newline_ranges(text)
        .map(|r| (r.start, r.end))
        .chain(std::iter::once((text.len(), text.len())));

    for (end, next_start) in line_ends {
        let line = line_start..end;
        if text[line.clone()].trim().is_empty() {
            if let Some(block) = current.take() {
                out.extend(trimmed(text, block));
            }
        } else {
            current = Some(match current {
                Some(block) => block.start..line.end,
                None => line,
            });
        }
        line_start = next_start;
    }

    if let Some(block) = current {
        out.extend(trimmed(text, block));
    }
    out
}
