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

//! An Earley recognizer for any grammar over the base model.
//!
//! The chart is one [`StateSet`] per input position. Each set is saturated by
//! alternating prediction and completion until a full pass adds nothing, then
//! scanning on the next input symbol seeds the following set. Prediction and
//! completion are monotone over a finite item universe, so saturation always
//! terminates; completion of a zero-length span can re-feed prediction within
//! the same set, which is why the two are interleaved to a fixed point rather
//! than run once.

use {
  crate::{
    grammar::{Elem, Grammar, Prod, Terminal},
    start_grammar::{wrap_grammar_with_start, StartGrammar, StartNonTerminal},
    state::ProdState,
    utils::{change_iter, change_loop, OrdKey, WasChanged},
  },
  std::collections::BTreeSet,
  unicode_segmentation::UnicodeSegmentation,
};

/// A chart item: a dotted production plus the chart column where its match
/// began.
///
/// Items order by production, then dot, then origin, which is what dedupes
/// them inside a [`StateSet`].
struct Item<'g, T, NT> {
  state: ProdState<'g, T, StartNonTerminal<NT>>,
  origin: usize,
}

impl<'g, T, NT> Clone for Item<'g, T, NT> {
  fn clone(&self) -> Self {
    *self
  }
}

impl<'g, T, NT> Copy for Item<'g, T, NT> {}

impl<'g, T, NT> Ord for Item<'g, T, NT>
where
  T: Ord,
  NT: Ord,
{
  fn cmp(&self, other: &Self) -> std::cmp::Ordering {
    self
      .state
      .cmp(&other.state)
      .then_with(|| self.origin.cmp(&other.origin))
  }
}

impl<'g, T, NT> PartialOrd for Item<'g, T, NT>
where
  T: Ord,
  NT: Ord,
{
  fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
    Some(self.cmp(other))
  }
}

impl<'g, T, NT> PartialEq for Item<'g, T, NT>
where
  T: Ord,
  NT: Ord,
{
  fn eq(&self, other: &Self) -> bool {
    self.cmp(other) == std::cmp::Ordering::Equal
  }
}

impl<'g, T, NT> Eq for Item<'g, T, NT>
where
  T: Ord,
  NT: Ord,
{
}

impl<'g, T, NT> std::fmt::Debug for Item<'g, T, NT>
where
  T: std::fmt::Debug,
  NT: std::fmt::Debug,
{
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(f, "({}) {:?}", self.origin, self.state)
  }
}

impl<'g, T, NT> Item<'g, T, NT>
where
  T: OrdKey,
  NT: OrdKey,
{
  fn from_prod_start(
    prod: &'g Prod<T, StartNonTerminal<NT>>,
    origin: usize,
  ) -> Self {
    Item {
      state: ProdState::from_start(prod),
      origin,
    }
  }

  /// New items predicted by this one: if the next element is a nonterminal,
  /// every production of that nonterminal starts at the given column.
  ///
  /// A complete item has no next element and predicts nothing.
  fn predict(
    &self,
    grammar: &'g StartGrammar<T, NT>,
    index: usize,
  ) -> Vec<Item<'g, T, NT>> {
    self
      .state
      .next_elem()
      .into_iter()
      .filter_map(Elem::as_nonterm)
      .flat_map(|nt| grammar.prods_for(nt))
      .map(|prod| Item::from_prod_start(prod, index))
      .collect()
  }

  /// The item advanced past the given terminal, if that is what it expects
  /// next. The origin column is kept.
  fn scan(&self, symbol: &T) -> Option<Item<'g, T, NT>> {
    self
      .state
      .next_elem_state()
      .and_then(|(elem, state)| elem.as_term().map(|t| (t, state)))
      .filter(|(t, _)| *t == symbol)
      .map(|(_, state)| Item {
        state,
        origin: self.origin,
      })
  }
}

/// One chart column: the set of items valid at a given input position.
///
/// Items are only ever added during construction, never removed or mutated,
/// so a column only grows.
struct StateSet<'g, T, NT> {
  items: BTreeSet<Item<'g, T, NT>>,
}

impl<'g, T, NT> PartialEq for StateSet<'g, T, NT>
where
  T: Ord,
  NT: Ord,
{
  fn eq(&self, other: &Self) -> bool {
    self.items == other.items
  }
}

impl<'g, T, NT> Eq for StateSet<'g, T, NT>
where
  T: Ord,
  NT: Ord,
{
}

impl<'g, T, NT> std::fmt::Debug for StateSet<'g, T, NT>
where
  T: std::fmt::Debug + Ord,
  NT: std::fmt::Debug + Ord,
{
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    f.debug_set().entries(self.items.iter()).finish()
  }
}

impl<'g, T, NT> StateSet<'g, T, NT>
where
  T: OrdKey,
  NT: OrdKey,
{
  fn new() -> Self {
    StateSet {
      items: BTreeSet::new(),
    }
  }

  fn from_items(iter: impl Iterator<Item = Item<'g, T, NT>>) -> Self {
    StateSet {
      items: iter.collect(),
    }
  }

  fn insert(&mut self, item: Item<'g, T, NT>) -> WasChanged {
    WasChanged::from_changed(self.items.insert(item))
  }

  fn items<'b>(&'b self) -> impl Iterator<Item = &'b Item<'g, T, NT>> {
    self.items.iter()
  }

  fn len(&self) -> usize {
    self.items.len()
  }

  /// Adds predictions for every item in this set whose next element is a
  /// nonterminal. Already-present items do not count as a change.
  fn predict(
    &mut self,
    grammar: &'g StartGrammar<T, NT>,
    index: usize,
  ) -> WasChanged {
    let new_items = self
      .items
      .iter()
      .flat_map(|item| item.predict(grammar, index))
      .collect::<Vec<_>>();
    change_iter(new_items.into_iter(), |item| self.insert(item))
  }

  /// Builds the next column from the items here that expect the scanned
  /// terminal. This is the only operation that consumes input and the only
  /// one that crosses a column boundary.
  fn scan(&self, symbol: &T) -> StateSet<'g, T, NT> {
    StateSet::from_items(self.items.iter().filter_map(|item| item.scan(symbol)))
  }
}

/// For every complete item in `curr`, advances the items in its origin column
/// that were waiting on the completed nonterminal, adding the advanced items
/// to `curr`.
///
/// `prev` holds the columns before `curr`; an origin equal to `prev.len()` is
/// the current column itself (a zero-length span completing where it
/// started), which is what forces prediction and completion to be iterated to
/// a fixed point.
fn complete<'g, T, NT>(
  prev: &[StateSet<'g, T, NT>],
  curr: &mut StateSet<'g, T, NT>,
) -> WasChanged
where
  T: OrdKey,
  NT: OrdKey,
{
  let index = prev.len();
  let mut new_items = Vec::new();
  for item in curr.items() {
    if !item.state.is_complete() {
      continue;
    }
    log::trace!("completing item {:?}", item);

    let completed_head = Elem::NonTerm(item.state.prod().head().clone());
    let origin_set = if item.origin == index {
      &*curr
    } else {
      &prev[item.origin]
    };
    for waiting in origin_set.items() {
      if let Some(state) = waiting.state.advance_if(&completed_head) {
        new_items.push(Item {
          state,
          origin: waiting.origin,
        });
      }
    }
  }

  change_iter(new_items.into_iter(), |item| curr.insert(item))
}

/// Answers membership queries against a grammar using the Earley algorithm.
///
/// The grammar is wrapped with a start marker production once, up front; each
/// query then builds and discards its own chart, so a recognizer can be
/// reused across any number of queries.
pub struct EarleyRecognizer<T, NT> {
  grammar: StartGrammar<T, NT>,
}

impl<T, NT> EarleyRecognizer<T, NT>
where
  T: OrdKey,
  NT: OrdKey,
{
  pub fn new(grammar: &Grammar<T, NT>) -> Self {
    EarleyRecognizer {
      grammar: wrap_grammar_with_start(grammar),
    }
  }

  /// Returns whether the grammar's start symbol derives `word`.
  ///
  /// Every input has a definite answer; an empty word, an empty grammar, or
  /// symbols the grammar never mentions all simply answer `false`.
  pub fn recognize(&self, word: &[T]) -> bool {
    let mut prev: Vec<StateSet<T, NT>> = Vec::with_capacity(word.len());
    let mut curr = StateSet::new();
    curr.insert(Item::from_prod_start(self.grammar.start_prod(), 0));
    self.saturate(&prev, &mut curr);

    for symbol in word {
      let next = curr.scan(symbol);
      prev.push(curr);
      curr = next;
      self.saturate(&prev, &mut curr);
    }

    let recognized = curr.items().any(|item| {
      item.origin == 0
        && item.state.is_complete()
        && item.state.prod().head().is_start()
    });
    recognized
  }

  /// Alternates prediction and completion until an entire pass over the
  /// column adds nothing new.
  fn saturate<'g>(
    &'g self,
    prev: &[StateSet<'g, T, NT>],
    curr: &mut StateSet<'g, T, NT>,
  ) {
    change_loop(|| {
      curr
        .predict(&self.grammar, prev.len())
        .join(complete(prev, curr))
    });
    log::trace!(
      "column {} saturated with {} items",
      prev.len(),
      curr.len()
    );
  }
}

impl<NT> EarleyRecognizer<Terminal, NT>
where
  NT: OrdKey,
{
  /// Recognizes a query string, treating each grapheme cluster as one
  /// terminal symbol.
  pub fn recognize_str(&self, word: &str) -> bool {
    let symbols = word.graphemes(true).map(Terminal::new).collect::<Vec<_>>();
    self.recognize(&symbols)
  }

  /// Answers a batch of query strings, one boolean per query, in order.
  pub fn recognize_all<'w>(
    &self,
    words: impl IntoIterator<Item = &'w str>,
  ) -> Vec<bool> {
    words.into_iter().map(|word| self.recognize_str(word)).collect()
  }
}
