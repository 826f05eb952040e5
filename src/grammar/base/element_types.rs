use crate::utils::{Name, ToDoc};

/// A terminal element.
///
/// Terminals match literal input symbols and are never rewritten. The name is
/// the symbol's text; nothing restricts it to a single character.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Terminal(Name);

impl Terminal {
  pub fn new(s: &str) -> Self {
    Terminal(Name::new(s))
  }

  pub fn name(&self) -> &str {
    self.0.str()
  }
}

impl std::fmt::Debug for Terminal {
  fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(fmt, "{:?}", self.0.str())
  }
}

impl ToDoc for Terminal {
  fn to_doc<'a, DA: pretty::DocAllocator<'a>>(
    &self,
    da: &'a DA,
  ) -> pretty::DocBuilder<'a, DA> {
    da.text(self.0.str().to_string())
  }
}

/// A nonterminal element, identified by name.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NonTerminal(Name);

impl NonTerminal {
  pub fn new(s: &str) -> Self {
    NonTerminal(Name::new(s))
  }

  pub fn name(&self) -> &str {
    self.0.str()
  }
}

impl std::fmt::Debug for NonTerminal {
  fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
    fmt.write_str(self.0.str())
  }
}

impl ToDoc for NonTerminal {
  fn to_doc<'a, DA: pretty::DocAllocator<'a>>(
    &self,
    da: &'a DA,
  ) -> pretty::DocBuilder<'a, DA> {
    da.text(self.0.str().to_string())
  }
}
