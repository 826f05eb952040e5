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

use crate::grammar::{Elem, Prod};

/// A state of a production within a parse state.
///
/// A production state keeps track of a particular production and an index
/// into the production, which is the current location of the parse state.
/// For example:
///
/// ```text
/// A => a <B> . c
/// ```
///
/// This indicates that the head is A, the production is a <B> c, and the
/// current location is just before the final c.
///
/// The index is always in the range `[0, prod.num_elements()]`. When it is at
/// the upper bound the state is *complete* and [`ProdState::next_elem`]
/// returns `None`; every consumer goes through that accessor, so a complete
/// state (including one over an ε-production) can never be indexed past its
/// end.
pub struct ProdState<'a, T, NT> {
  /// The production this state is part of.
  prod: &'a Prod<T, NT>,

  /// The index of this production state.
  index: usize,
}

impl<'a, T, NT> Clone for ProdState<'a, T, NT> {
  fn clone(&self) -> Self {
    *self
  }
}

impl<'a, T, NT> Copy for ProdState<'a, T, NT> {}

impl<'a, T, NT> Ord for ProdState<'a, T, NT>
where
  T: Ord,
  NT: Ord,
{
  fn cmp(&self, other: &Self) -> std::cmp::Ordering {
    self
      .prod
      .cmp(other.prod)
      .then_with(|| self.index.cmp(&other.index))
  }
}

impl<'a, T, NT> PartialOrd for ProdState<'a, T, NT>
where
  T: Ord,
  NT: Ord,
{
  fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
    Some(self.cmp(other))
  }
}

impl<'a, T, NT> PartialEq for ProdState<'a, T, NT>
where
  T: Ord,
  NT: Ord,
{
  fn eq(&self, other: &Self) -> bool {
    self.cmp(other) == std::cmp::Ordering::Equal
  }
}

impl<'a, T, NT> Eq for ProdState<'a, T, NT>
where
  T: Ord,
  NT: Ord,
{
}

impl<'a, T, NT> ProdState<'a, T, NT> {
  /// Create a ProdState from a given production.
  ///
  /// This state's index will be at the start of the production.
  pub fn from_start(prod: &'a Prod<T, NT>) -> Self {
    ProdState { prod, index: 0 }
  }

  pub fn prod(&self) -> &'a Prod<T, NT> {
    self.prod
  }

  pub fn index(&self) -> usize {
    self.index
  }

  pub fn next_elem(&self) -> Option<&'a Elem<T, NT>> {
    self.prod.element_at(self.index)
  }

  /// Returns the next element together with the state past it. If this state
  /// is at the end, then it returns `None`.
  pub fn next_elem_state(
    &self,
  ) -> Option<(&'a Elem<T, NT>, ProdState<'a, T, NT>)> {
    self.next_elem().map(|elem| {
      (
        elem,
        ProdState {
          prod: self.prod,
          index: self.index + 1,
        },
      )
    })
  }

  pub fn is_complete(&self) -> bool {
    self.prod.num_elements() == self.index
  }
}

impl<'a, T, NT> ProdState<'a, T, NT>
where
  T: Eq,
  NT: Eq,
{
  /// Return Some(state) which is this state advanced if
  /// the next element is elem.
  pub fn advance_if(&self, elem: &Elem<T, NT>) -> Option<ProdState<'a, T, NT>> {
    self
      .next_elem_state()
      .filter(|(e, _)| *e == elem)
      .map(|(_, next)| next)
  }
}

impl<'a, T, NT> std::fmt::Debug for ProdState<'a, T, NT>
where
  T: std::fmt::Debug,
  NT: std::fmt::Debug,
{
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(f, "{:?} =>", self.prod.head())?;
    for (i, elem) in self.prod.elements().enumerate() {
      if i == self.index {
        write!(f, " .")?;
      }
      write!(f, " {:?}", elem)?;
    }
    if self.is_complete() {
      write!(f, " .")?;
    }
    Ok(())
  }
}

#[cfg(test)]
mod test {
  use super::*;
  use crate::grammar::{NonTerminal, Terminal};

  fn prod_ab() -> Prod<Terminal, NonTerminal> {
    Prod::new(
      NonTerminal::new("S"),
      vec![
        Elem::Term(Terminal::new("a")),
        Elem::NonTerm(NonTerminal::new("T")),
      ],
    )
  }

  #[test]
  fn test_advance_to_completion() {
    let prod = prod_ab();
    let state = ProdState::from_start(&prod);
    assert!(!state.is_complete());
    assert_eq!(state.next_elem(), Some(&Elem::Term(Terminal::new("a"))));

    let (_, state) = state.next_elem_state().unwrap();
    let (_, state) = state.next_elem_state().unwrap();
    assert!(state.is_complete());
    assert_eq!(state.next_elem(), None);
    assert_eq!(state.next_elem_state().map(|(e, _)| e), None);
  }

  #[test]
  fn test_empty_prod_is_complete_at_start() {
    let prod: Prod<Terminal, NonTerminal> =
      Prod::new(NonTerminal::new("S"), vec![]);
    let state = ProdState::from_start(&prod);
    assert!(state.is_complete());
    assert_eq!(state.next_elem(), None);
  }

  #[test]
  fn test_advance_if() {
    let prod = prod_ab();
    let state = ProdState::from_start(&prod);
    assert!(state.advance_if(&Elem::Term(Terminal::new("b"))).is_none());
    let advanced = state.advance_if(&Elem::Term(Terminal::new("a"))).unwrap();
    assert_eq!(advanced.index(), 1);
  }

  #[test]
  fn test_order_is_prod_then_index() {
    let prod = prod_ab();
    let start = ProdState::from_start(&prod);
    let (_, advanced) = start.next_elem_state().unwrap();
    assert!(start < advanced);
    assert_eq!(start, ProdState::from_start(&prod));
  }

  #[test]
  fn test_debug_shows_dot() {
    let prod = prod_ab();
    let state = ProdState::from_start(&prod);
    let (_, advanced) = state.next_elem_state().unwrap();
    assert_eq!(format!("{:?}", state), "S => . \"a\" <T>");
    assert_eq!(format!("{:?}", advanced), "S => \"a\" . <T>");
  }
}
