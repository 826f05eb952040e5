// Copyright 2018 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

pub mod builder;
mod element_types;

use {
  crate::utils::ToDoc,
  std::collections::{BTreeMap, BTreeSet},
};

use std::fmt::Debug;

pub use element_types::{NonTerminal, Terminal};

/// A single element (terminal or non-terminal).
#[derive(Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum Elem<T, NT> {
  Term(T),
  NonTerm(NT),
}

impl<T, NT> Elem<T, NT> {
  /// If this element is a terminal, returns a `Some` value containing a
  /// terminal datum. Returns `None` otherwise.
  pub fn as_term(&self) -> Option<&T> {
    match self {
      Elem::NonTerm(_) => None,
      Elem::Term(t) => Some(t),
    }
  }

  /// Gets an element as a nonterm. Returns a `None` value otherwise.
  pub fn as_nonterm(&self) -> Option<&NT> {
    match self {
      Elem::NonTerm(nt) => Some(nt),
      Elem::Term(_) => None,
    }
  }
}

impl<T, NT> ToDoc for Elem<T, NT>
where
  T: ToDoc,
  NT: ToDoc,
{
  fn to_doc<'a, DA: pretty::DocAllocator<'a>>(
    &self,
    da: &'a DA,
  ) -> pretty::DocBuilder<'a, DA>
  where
    DA::Doc: Clone,
  {
    match self {
      Elem::NonTerm(nt) => {
        da.text("<").append(nt.to_doc(da)).append(da.text(">"))
      }
      Elem::Term(t) => t.to_doc(da),
    }
  }
}

impl<T, NT> std::fmt::Debug for Elem<T, NT>
where
  T: Debug,
  NT: Debug,
{
  fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
    match self {
      Elem::Term(term) => fmt.write_str(&format!("{:?}", term)),
      Elem::NonTerm(nt) => fmt.write_str(&format!("<{:?}>", nt)),
    }
  }
}

/// A single production `head → elems`.
///
/// Immutable once constructed. The derived total order compares the head
/// first and then the element sequence, so structural equality coincides with
/// "neither is less than the other". An empty element sequence is a legal
/// ε-production; callers must go through [`crate::state::ProdState`] accessors
/// rather than indexing the elements directly.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct Prod<T, NT> {
  head: NT,
  elems: Vec<Elem<T, NT>>,
}

impl<T, NT> Prod<T, NT> {
  pub fn new(head: NT, elems: Vec<Elem<T, NT>>) -> Self {
    Prod { head, elems }
  }

  /// Returns the head nonterminal this production rewrites.
  pub fn head(&self) -> &NT {
    &self.head
  }

  /// Returns an iterator over the elements of this production.
  pub fn elements(&self) -> impl Iterator<Item = &Elem<T, NT>> + Clone {
    self.elems.iter()
  }

  pub fn element_at(&self, index: usize) -> Option<&Elem<T, NT>> {
    self.elems.get(index)
  }

  /// Returns the number of elements in this production.
  pub fn num_elements(&self) -> usize {
    self.elems.len()
  }
}

impl<T, NT> ToDoc for Prod<T, NT>
where
  T: ToDoc,
  NT: ToDoc,
{
  fn to_doc<'a, DA: pretty::DocAllocator<'a>>(
    &self,
    da: &'a DA,
  ) -> pretty::DocBuilder<'a, DA>
  where
    DA::Doc: Clone,
  {
    if self.elems.is_empty() {
      da.text("ε")
    } else {
      da.intersperse(self.elems.iter().map(|e| e.to_doc(da)), da.softline())
    }
  }
}

/// A context-free language grammar.
///
/// This is a context-free grammar consisting of
///
/// - A start nonterminal
/// - A set of productions, each of which consists of
///   - A head nonterminal
///   - A list of elements, each either a terminal or a nonterminal.
///
/// Duplicate productions (by structural equality) collapse at construction.
/// Grammars are read-only, and the accessors use the lifetime of the grammar
/// object. A nonterminal that appears in a production body but has no
/// productions of its own is not an error; it simply never derives anything.
#[derive(Clone)]
pub struct Grammar<T, NT> {
  start_symbol: NT,
  rule_set: BTreeMap<NT, Vec<Prod<T, NT>>>,
}

impl<T, NT> Grammar<T, NT>
where
  T: Ord,
  NT: Ord + Clone,
{
  pub fn new(
    start: NT,
    prods: impl IntoIterator<Item = Prod<T, NT>>,
  ) -> Self {
    let mut rule_set: BTreeMap<NT, BTreeSet<Prod<T, NT>>> = BTreeMap::new();
    for prod in prods {
      rule_set
        .entry(prod.head().clone())
        .or_insert_with(BTreeSet::new)
        .insert(prod);
    }

    Grammar {
      start_symbol: start,
      rule_set: rule_set
        .into_iter()
        .map(|(head, prods)| (head, prods.into_iter().collect()))
        .collect(),
    }
  }
}

impl<T, NT> Grammar<T, NT> {
  /// Returns the start nonterminal for this grammar.
  pub fn start_nt(&self) -> &NT {
    &self.start_symbol
  }

  /// Gets an iterator over all productions in the grammar.
  pub fn prods(&self) -> impl Iterator<Item = &Prod<T, NT>> {
    self.rule_set.values().flatten()
  }
}

impl<T, NT> Grammar<T, NT>
where
  NT: Ord,
{
  /// Returns the productions whose head is the given nonterminal.
  ///
  /// A nonterminal without productions yields the empty slice.
  pub fn prods_for(&self, nt: &NT) -> &[Prod<T, NT>] {
    self.rule_set.get(nt).map(Vec::as_slice).unwrap_or(&[])
  }
}

impl<T, NT> std::fmt::Debug for Grammar<T, NT>
where
  T: Debug,
  NT: Debug,
{
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    let mut dbg_struct = f.debug_struct("Grammar");
    dbg_struct.field("start", &self.start_symbol);
    dbg_struct.field("prods", &self.prods().collect::<Vec<_>>());
    dbg_struct.finish()
  }
}

impl<T, NT> Grammar<T, NT>
where
  T: ToDoc,
  NT: ToDoc,
{
  pub fn to_pretty(&self) -> String {
    let arena = pretty::Arena::new();
    format!("{}", self.to_doc(&arena).into_doc().pretty(80))
  }
}

impl<T, NT> ToDoc for Grammar<T, NT>
where
  T: ToDoc,
  NT: ToDoc,
{
  fn to_doc<'a, DA: pretty::DocAllocator<'a>>(
    &self,
    da: &'a DA,
  ) -> pretty::DocBuilder<'a, DA>
  where
    DA::Doc: Clone,
  {
    let start_entry = da
      .text("Start =")
      .group()
      .append(da.softline())
      .append(self.start_nt().to_doc(da));
    let rules_entry = da.text("Rules ").append(
      da.softline()
        .append(
          da.concat(self.rule_set.iter().map(|(head, prods)| {
            head
              .to_doc(da)
              .append(da.text(" =>"))
              .append(da.softline())
              .append(da.intersperse(
                prods.iter().map(|prod| prod.to_doc(da)),
                da.text(" |").append(da.softline()),
              ))
              .append(da.text(";"))
              .append(da.softline())
          }))
          .nest(2),
        )
        .braces(),
    );

    da.concat(
      vec![start_entry, rules_entry]
        .into_iter()
        .map(|doc| doc.append(da.text(",")).append(da.softline())),
    )
  }
}

#[cfg(test)]
mod test {
  use super::*;

  fn nt(s: &str) -> NonTerminal {
    NonTerminal::new(s)
  }

  fn term_elem(s: &str) -> Elem<Terminal, NonTerminal> {
    Elem::Term(Terminal::new(s))
  }

  #[test]
  fn test_duplicate_prods_collapse() {
    let prod = Prod::new(nt("S"), vec![term_elem("a")]);
    let g = Grammar::new(nt("S"), vec![prod.clone(), prod.clone()]);
    assert_eq!(g.prods_for(&nt("S")).len(), 1);
  }

  #[test]
  fn test_prods_for_unknown_nonterm_is_empty() {
    let g = Grammar::new(
      nt("S"),
      vec![Prod::new(nt("S"), vec![term_elem("a")])],
    );
    assert!(g.prods_for(&nt("T")).is_empty());
  }

  #[test]
  fn test_prod_order_is_head_then_elems() {
    let p1 = Prod::new(nt("S"), vec![term_elem("a")]);
    let p2 = Prod::new(nt("S"), vec![term_elem("b")]);
    let p3 = Prod::new(nt("T"), vec![term_elem("a")]);
    assert!(p1 < p2);
    assert!(p2 < p3);
    assert_eq!(p1, p1.clone());
  }

  #[test]
  fn test_to_pretty_renders_rules() {
    let g = Grammar::new(
      nt("S"),
      vec![
        Prod::new(nt("S"), vec![term_elem("a")]),
        Prod::new(nt("S"), vec![]),
      ],
    );
    let rendered = g.to_pretty();
    assert!(rendered.contains("Start = S"));
    assert!(rendered.contains("ε"));
  }
}
