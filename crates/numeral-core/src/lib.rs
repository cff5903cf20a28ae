//! Cardinal number conversion between integers and spelled-out text.
//!
//! A finite-state parser folds normalized word tokens into a quantity, and a
//! renderer decomposes a quantity into base-1000 groups. Both directions are
//! driven by a per-language [`Grammar`] looked up in a [`Registry`].

pub mod convert;
pub mod engine;
pub mod error;
pub mod fsm;
pub mod grammar;
pub mod identify;
pub mod options;
pub mod plural;
pub mod registry;
pub mod settings;

pub use convert::{decode, encode};
pub use engine::Engine;
pub use error::{ConvertError, ConvertResult};
pub use grammar::{Category, English, Grammar, GrammarEntry, GroupChunk, Russian, Vocabulary};
pub use identify::{LanguageIdentifier, WordListIdentifier};
pub use options::ConversionOptions;
pub use registry::Registry;
pub use settings::{Settings, SettingsError};
