//! Recognition of context-free languages using the Earley algorithm.
//!
//! A [`grammar::Grammar`] is a read-only set of productions over terminal and
//! nonterminal symbols. An [`EarleyRecognizer`] wraps a grammar with a
//! distinguished start production and answers membership queries: given a
//! sequence of terminals, does the grammar's start symbol derive it?
//!
//! The recognizer builds a fresh chart per query and reads the boolean answer
//! off the final chart column. It does not build parse trees.

pub mod grammar;
pub mod parsers;
pub mod start_grammar;
pub mod state;
pub mod utils;

pub use parsers::earley::EarleyRecognizer;
