//! Decode and encode drivers shared by every language.
//!
//! `decode` normalizes text with the grammar's rules, looks every token up in
//! its vocabulary and folds the entries through the [`fsm`](crate::fsm)
//! automaton. `encode` splits a value into base-1000 groups and lets the
//! grammar spell each one.


use tracing::{debug, debug_span};

use crate::error::{ConvertError, ConvertResult};
use crate::fsm::{transition, ParserState};
use crate::grammar::{Category, Grammar, GrammarEntry, GroupChunk};

/// Running totals of one decode call.
struct Accumulator {
    state: ParserState,
    /// Value of the group being read, 0..=999.
    group_total: u64,
    total: u64,
    /// Multiplier of the most recent group word.
    last_group: Option<u64>,
}

impl Accumulator {
    fn new() -> Self {
        Self {
            state: ParserState::INITIAL,
            group_total: 0,
            total: 0,
            last_group: None,
        }
    }

    /// Feed one entry; false if it cannot follow what came before.
    fn push(&mut self, entry: GrammarEntry) -> bool {
        self.state = transition(self.state, entry);
        if !self.state.is_accepting() {
            return false;
        }

        if entry.category == Category::Group {
            if self.last_group.is_some_and(|prev| entry.value >= prev) {
                self.state = ParserState::Error;
                return false;
            }
            self.total += self.group_total * entry.value;
            self.group_total = 0;
            self.last_group = Some(entry.value);
        } else {
            self.group_total += entry.value;
        }
        true
    }

    fn finish(self) -> u64 {
        self.total + self.group_total
    }
}

/// Parse spelled-out `text` into an integer using `grammar`.
///
/// Fails with `UnrecognizedToken` on the first token that is not in the
/// vocabulary or cannot follow the tokens before it. Positions count tokens
/// after normalization, starting at 0.
pub fn decode(grammar: &dyn Grammar, text: &str) -> ConvertResult<u64> {
    let normalized = grammar.normalize(text);
    let tokens: Vec<&str> = normalized.split_whitespace().collect();
    let _span = debug_span!("decode", lang = grammar.code(), token_count = tokens.len()).entered();

    let vocab = grammar.vocabulary();
    match tokens.as_slice() {
        [] => return Err(ConvertError::unrecognized("", 0)),
        [only] if vocab.is_zero(only) => return Ok(0),
        _ => {}
    }

    let mut acc = Accumulator::new();
    for (position, &token) in tokens.iter().enumerate() {
        let Some(entry) = vocab.lookup(token) else {
            debug!(token, position, "token not in vocabulary");
            return Err(ConvertError::unrecognized(token, position));
        };
        if !acc.push(entry) {
            debug!(token, position, ?entry, "token out of order");
            return Err(ConvertError::unrecognized(token, position));
        }
    }

    let value = acc.finish();
    debug!(value, "decoded");
    Ok(value)
}

/// Spell `value` using `grammar`.
///
/// Groups are rendered most significant first; empty groups are skipped.
pub fn encode(grammar: &dyn Grammar, value: u64) -> ConvertResult<String> {
    let _span = debug_span!("encode", lang = grammar.code(), value).entered();

    let vocab = grammar.vocabulary();
    let max = vocab.max_value();
    if value > max {
        debug!(max, "value out of range");
        return Err(ConvertError::OutOfRange { value, max });
    }
    if value == 0 {
        return Ok(vocab.zero_word().to_string());
    }

    let mut words: Vec<String> = Vec::new();
    for (group, magnitude) in split_groups(value).into_iter().rev() {
        let chunk = GroupChunk {
            value: group,
            magnitude,
            has_preceding: !words.is_empty(),
        };
        words.push(grammar.render_group(&chunk));
        if let Some(name) = grammar.group_name(&chunk) {
            words.push(name);
        }
    }

    Ok(words.join(" ").trim().to_string())
}

/// Non-zero base-1000 groups of `value` with their magnitudes, least
/// significant first.
fn split_groups(value: u64) -> Vec<(u16, u64)> {
    let mut groups = Vec::new();
    let mut rest = value;
    let mut magnitude = 1u64;
    while rest > 0 {
        let group = (rest % 1000) as u16;
        if group > 0 {
            groups.push((group, magnitude));
        }
        rest /= 1000;
        magnitude = magnitude.saturating_mul(1000);
    }
    groups
}
