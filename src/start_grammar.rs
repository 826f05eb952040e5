use crate::grammar::{Elem, Grammar, Prod};
use crate::utils::{take_only, ToDoc};

/// A nonterminal space extended with a distinguished start marker.
///
/// Acceptance checks reduce to "did the `Start` production complete over the
/// whole input", without reserving a name in the caller's own nonterminal
/// alphabet.
#[derive(Clone, PartialOrd, Ord, PartialEq, Eq, Hash, Debug)]
pub enum StartNonTerminal<NT> {
  Start,
  Base(NT),
}

impl<NT> StartNonTerminal<NT> {
  pub fn is_start(&self) -> bool {
    matches!(self, StartNonTerminal::Start)
  }
}

impl<NT> ToDoc for StartNonTerminal<NT>
where
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
      StartNonTerminal::Start => da.text("<START>"),
      StartNonTerminal::Base(nt) => nt.to_doc(da),
    }
  }
}

pub type StartGrammar<T, NT> = Grammar<T, StartNonTerminal<NT>>;

impl<T, NT> StartGrammar<T, NT>
where
  NT: Ord,
{
  /// Returns the single production of the start marker rule.
  pub fn start_prod(&self) -> &Prod<T, StartNonTerminal<NT>> {
    take_only(self.prods_for(&StartNonTerminal::Start).iter())
      .expect("The start rule should only have a single production.")
  }
}

fn base_elem_to_start_elem<T, NT>(
  elem: &Elem<T, NT>,
) -> Elem<T, StartNonTerminal<NT>>
where
  T: Clone,
  NT: Clone,
{
  match elem {
    Elem::Term(t) => Elem::Term(t.clone()),
    Elem::NonTerm(nt) => Elem::NonTerm(StartNonTerminal::Base(nt.clone())),
  }
}

/// Wraps a grammar so that its start symbol is derived from a single marker
/// production `<START> → start`.
pub fn wrap_grammar_with_start<T, NT>(
  g: &Grammar<T, NT>,
) -> StartGrammar<T, NT>
where
  T: Ord + Clone,
  NT: Ord + Clone,
{
  let mut prods = vec![Prod::new(
    StartNonTerminal::Start,
    vec![Elem::NonTerm(StartNonTerminal::Base(g.start_nt().clone()))],
  )];

  for prod in g.prods() {
    prods.push(Prod::new(
      StartNonTerminal::Base(prod.head().clone()),
      prod.elements().map(base_elem_to_start_elem).collect(),
    ));
  }

  Grammar::new(StartNonTerminal::Start, prods)
}
