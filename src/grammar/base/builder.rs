// Copyright 2019 Google LLC
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

use super::{Elem, Grammar, NonTerminal, Prod, Terminal};

/// A helper trait to allow builder methods to either take a type `T`, or a
/// reference to `T` if it is clonable.
pub trait BuilderInto<T> {
  /// Consumes self and produces a value of type `T`.
  fn builder_into(self) -> T;
}

impl<T> BuilderInto<T> for T {
  fn builder_into(self) -> T {
    self
  }
}

impl<'a, T> BuilderInto<T> for &'a T
where
  T: Clone,
{
  fn builder_into(self) -> T {
    self.clone()
  }
}

impl BuilderInto<Terminal> for &'_ str {
  fn builder_into(self) -> Terminal {
    Terminal::new(self)
  }
}

impl BuilderInto<NonTerminal> for &'_ str {
  fn builder_into(self) -> NonTerminal {
    NonTerminal::new(self)
  }
}

pub struct ProductionBuilder<T, NT> {
  elems: Vec<Elem<T, NT>>,
}

impl<T, NT> ProductionBuilder<T, NT> {
  fn new() -> Self {
    ProductionBuilder { elems: Vec::new() }
  }

  fn build(self, head: NT) -> Prod<T, NT> {
    Prod::new(head, self.elems)
  }

  pub fn add_term(&mut self, term: impl BuilderInto<T>) -> &mut Self {
    self.elems.push(Elem::Term(term.builder_into()));
    self
  }

  pub fn add_nonterm(&mut self, nonterm: impl BuilderInto<NT>) -> &mut Self {
    self.elems.push(Elem::NonTerm(nonterm.builder_into()));
    self
  }
}

// ----------------

pub struct RuleBuilder<T, NT> {
  head: NT,
  prods: Vec<Prod<T, NT>>,
}

impl<T, NT> RuleBuilder<T, NT>
where
  NT: Clone,
{
  fn new(head: NT) -> Self {
    RuleBuilder {
      head,
      prods: Vec::new(),
    }
  }

  fn build(self) -> Vec<Prod<T, NT>> {
    self.prods
  }

  pub fn add_prod(
    &mut self,
    build_fn: impl FnOnce(&mut ProductionBuilder<T, NT>),
  ) -> &mut Self {
    let mut builder = ProductionBuilder::new();
    build_fn(&mut builder);
    self.prods.push(builder.build(self.head.clone()));
    self
  }
}

// ----------------

pub struct GrammarBuilder<T, NT> {
  start: NT,
  prods: Vec<Prod<T, NT>>,
}

impl<T, NT> GrammarBuilder<T, NT>
where
  T: Ord,
  NT: Ord + Clone,
{
  fn new(start: NT) -> Self {
    GrammarBuilder {
      start,
      prods: Vec::new(),
    }
  }

  fn build(self) -> Grammar<T, NT> {
    let GrammarBuilder { start, prods } = self;
    Grammar::new(start, prods)
  }

  pub fn add_rule<F>(
    &mut self,
    head: impl BuilderInto<NT>,
    build_fn: F,
  ) -> &mut Self
  where
    F: FnOnce(&mut RuleBuilder<T, NT>),
  {
    let mut rule_builder = RuleBuilder::new(head.builder_into());
    build_fn(&mut rule_builder);
    self.prods.extend(rule_builder.build());
    self
  }
}

/// Builds a grammar using a builder function.
///
/// Example:
///
/// ```rust
/// # use conga::grammar::{build, Grammar, NonTerminal, Terminal};
/// let t_a = Terminal::new("a");
/// let nt_x = NonTerminal::new("X");
/// let g: Grammar<Terminal, NonTerminal> = build(&nt_x, |gb| {
///   gb.add_rule(&nt_x, |rb| {
///     rb.add_prod(|pb| {
///       pb.add_term(&t_a).add_nonterm(&nt_x).add_term(&t_a);
///     })
///     .add_prod(|_pb| {});
///   });
/// });
/// ```
///
/// Note that arguments that take a terminal or nonterminal can either take a
/// non-reference value, or a cloneable reference value. For the base
/// [`Terminal`]/[`NonTerminal`] symbol types a string literal works too:
///
/// ```rust
/// # use conga::grammar::{build, Grammar, NonTerminal, Terminal};
/// let g: Grammar<Terminal, NonTerminal> = build("X", |gb| {
///   gb.add_rule("X", |rb| {
///     rb.add_prod(|pb| {
///       pb.add_term("a").add_nonterm("X").add_term("a");
///     })
///     .add_prod(|_pb| {});
///   });
/// });
/// ```
pub fn build<T, NT>(
  start: impl BuilderInto<NT>,
  build_fn: impl FnOnce(&mut GrammarBuilder<T, NT>),
) -> Grammar<T, NT>
where
  T: Ord,
  NT: Ord + Clone,
{
  let mut builder = GrammarBuilder::new(start.builder_into());
  build_fn(&mut builder);
  builder.build()
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn test_str_args_build_base_symbols() {
    let g: Grammar<Terminal, NonTerminal> = build("S", |gb| {
      gb.add_rule("S", |rb| {
        rb.add_prod(|pb| {
          pb.add_term("a").add_nonterm("T");
        });
      });
    });
    assert_eq!(g.start_nt(), &NonTerminal::new("S"));
    let prod = &g.prods_for(&NonTerminal::new("S"))[0];
    assert_eq!(
      prod.element_at(0).unwrap().as_term(),
      Some(&Terminal::new("a"))
    );
    assert_eq!(
      prod.element_at(1).unwrap().as_nonterm(),
      Some(&NonTerminal::new("T"))
    );
  }
}
