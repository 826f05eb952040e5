//! A compact text format for grammars.
//!
//! Each non-empty line is one production, written `head -> body`. The head is
//! a single uppercase ASCII letter naming a nonterminal. The body is a string
//! of symbols without separators: uppercase ASCII letters are nonterminals,
//! every other character is a terminal. An empty body is an ε-production.
//! The head of the first production is the grammar's start symbol.
//!
//! ```text
//! S -> aT
//! S -> S
//! T -> b
//! ```
//!
//! Duplicate productions are idempotent: the resulting grammar collapses them.

use {
  super::{Elem, Grammar, NonTerminal, Prod, Terminal},
  thiserror::Error,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GrammarParseError {
  #[error("line {line}: missing '->' separator")]
  MissingArrow { line: usize },
  #[error("line {line}: head {head:?} is not a single uppercase letter")]
  InvalidHead { line: usize, head: String },
  #[error("line {line}: whitespace inside production body")]
  WhitespaceInBody { line: usize },
}

/// Parses a grammar from its text form.
///
/// Blank lines are skipped. A text without any productions yields a grammar
/// with no rules; recognition against it simply answers `false`.
pub fn parse_grammar(
  text: &str,
) -> Result<Grammar<Terminal, NonTerminal>, GrammarParseError> {
  let mut start = None;
  let mut prods = Vec::new();

  for (index, raw_line) in text.lines().enumerate() {
    let line = index + 1;
    let trimmed = raw_line.trim();
    if trimmed.is_empty() {
      continue;
    }

    let (head, body) = trimmed
      .split_once("->")
      .ok_or(GrammarParseError::MissingArrow { line })?;
    let head = parse_head(head.trim(), line)?;
    let body = body.trim();
    if body.chars().any(char::is_whitespace) {
      return Err(GrammarParseError::WhitespaceInBody { line });
    }

    if start.is_none() {
      start = Some(head.clone());
    }
    prods.push(Prod::new(head, body.chars().map(symbol_elem).collect()));
  }

  let start = start.unwrap_or_else(|| NonTerminal::new("S"));
  Ok(Grammar::new(start, prods))
}

fn parse_head(
  head: &str,
  line: usize,
) -> Result<NonTerminal, GrammarParseError> {
  let mut chars = head.chars();
  match (chars.next(), chars.next()) {
    (Some(c), None) if c.is_ascii_uppercase() => {
      Ok(NonTerminal::new(&c.to_string()))
    }
    _ => Err(GrammarParseError::InvalidHead {
      line,
      head: head.to_string(),
    }),
  }
}

fn symbol_elem(c: char) -> Elem<Terminal, NonTerminal> {
  let s = c.to_string();
  if c.is_ascii_uppercase() {
    Elem::NonTerm(NonTerminal::new(&s))
  } else {
    Elem::Term(Terminal::new(&s))
  }
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn test_parse_basic_grammar() {
    let g = parse_grammar("S -> aT\nS -> S\nT -> b").unwrap();
    assert_eq!(g.start_nt(), &NonTerminal::new("S"));
    assert_eq!(g.prods_for(&NonTerminal::new("S")).len(), 2);
    assert_eq!(g.prods_for(&NonTerminal::new("T")).len(), 1);
  }

  #[test]
  fn test_parse_compact_arrow_and_epsilon() {
    let g = parse_grammar("S->aSb\nS->").unwrap();
    let prods = g.prods_for(&NonTerminal::new("S"));
    assert_eq!(prods.len(), 2);
    assert!(prods.iter().any(|p| p.num_elements() == 0));
  }

  #[test]
  fn test_parse_duplicate_rules_collapse() {
    let g = parse_grammar("S -> a\nS -> a").unwrap();
    assert_eq!(g.prods_for(&NonTerminal::new("S")).len(), 1);
  }

  #[test]
  fn test_parse_classifies_symbols() {
    let g = parse_grammar("S -> aT").unwrap();
    let prod = &g.prods_for(&NonTerminal::new("S"))[0];
    assert!(prod.element_at(0).unwrap().as_term().is_some());
    assert!(prod.element_at(1).unwrap().as_nonterm().is_some());
  }

  #[test]
  fn test_parse_missing_arrow() {
    assert_eq!(
      parse_grammar("Sab").unwrap_err(),
      GrammarParseError::MissingArrow { line: 1 }
    );
  }

  #[test]
  fn test_parse_invalid_head() {
    assert_eq!(
      parse_grammar("s -> a").unwrap_err(),
      GrammarParseError::InvalidHead {
        line: 1,
        head: "s".to_string()
      }
    );
  }

  #[test]
  fn test_parse_whitespace_in_body() {
    assert_eq!(
      parse_grammar("S -> a b").unwrap_err(),
      GrammarParseError::WhitespaceInBody { line: 1 }
    );
  }

  #[test]
  fn test_parse_empty_text() {
    let g = parse_grammar("\n\n").unwrap();
    assert!(g.prods().next().is_none());
  }
}
