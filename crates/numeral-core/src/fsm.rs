//! Token-order automaton for one group of a spelled-out number.
//!
//! Within a group the words must come hundreds, then tens or a teen, then
//! ones; a group word ("thousand", "миллион") closes the group. The state
//! values carry no behaviour of their own: [`transition`] is the single
//! table that decides every move.

use crate::grammar::{Category, GrammarEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParserState {
    /// Initial state, and the state after a group word closed a group.
    Group,
    Hundreds,
    /// `teen` is set for 10..=19, which cannot be followed by a ones word.
    TensOrTeens { teen: bool },
    Ones,
    /// Terminal and absorbing.
    Error,
}

impl ParserState {
    pub const INITIAL: ParserState = ParserState::Group;

    /// The state a token of the given entry moves into when it is accepted.
    pub fn entered_by(entry: GrammarEntry) -> ParserState {
        match entry.category {
            Category::Ones => ParserState::Ones,
            Category::Tens => ParserState::TensOrTeens {
                teen: entry.value < 20,
            },
            Category::Hundreds => ParserState::Hundreds,
            Category::Group => ParserState::Group,
        }
    }

    /// A number may end in any state but `Error`.
    pub fn is_accepting(self) -> bool {
        self != ParserState::Error
    }
}

/// Move from `current` on `event`; any pair not in the table lands in `Error`.
pub fn transition(current: ParserState, event: GrammarEntry) -> ParserState {
    use ParserState::*;

    let next = ParserState::entered_by(event);
    match (current, next) {
        (Error, _) => Error,
        (Group, Hundreds | TensOrTeens { .. } | Ones) => next,
        (Hundreds, TensOrTeens { .. } | Ones | Group) => next,
        (TensOrTeens { teen: false }, Ones) => next,
        (TensOrTeens { .. }, Group) => next,
        (Ones, Group) => next,
        _ => Error,
    }
}
