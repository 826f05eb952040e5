//! Small grammars shared by tests across the crate.

use super::{build, Grammar, NonTerminal, Terminal};

pub type BaseGrammar = Grammar<Terminal, NonTerminal>;

/// `S → S | a T`, `T → b`. Derives exactly `"ab"`.
pub fn make_ab() -> BaseGrammar {
  let nt_s = NonTerminal::new("S");
  let nt_t = NonTerminal::new("T");
  let t_a = Terminal::new("a");
  let t_b = Terminal::new("b");
  build(&nt_s, |gb| {
    gb.add_rule(&nt_s, |rb| {
      rb.add_prod(|pb| {
        pb.add_nonterm(&nt_s);
      })
      .add_prod(|pb| {
        pb.add_term(&t_a).add_nonterm(&nt_t);
      });
    })
    .add_rule(&nt_t, |rb| {
      rb.add_prod(|pb| {
        pb.add_term(&t_b);
      });
    });
  })
}

/// `S → S | a`. The unit cycle exercises fixed-point termination.
pub fn make_cyclic_unit() -> BaseGrammar {
  let nt_s = NonTerminal::new("S");
  let t_a = Terminal::new("a");
  build(&nt_s, |gb| {
    gb.add_rule(&nt_s, |rb| {
      rb.add_prod(|pb| {
        pb.add_nonterm(&nt_s);
      })
      .add_prod(|pb| {
        pb.add_term(&t_a);
      });
    });
  })
}

/// Balanced parentheses: `S → ( S ) S | ε`.
pub fn make_paren() -> BaseGrammar {
  let nt_s = NonTerminal::new("S");
  let t_lp = Terminal::new("(");
  let t_rp = Terminal::new(")");
  build(&nt_s, |gb| {
    gb.add_rule(&nt_s, |rb| {
      rb.add_prod(|pb| {
        pb.add_term(&t_lp)
          .add_nonterm(&nt_s)
          .add_term(&t_rp)
          .add_nonterm(&nt_s);
      })
      .add_prod(|_pb| {});
    });
  })
}

/// Left-recursive sums over multi-character tokens: `E → E plus num | num`.
pub fn make_sum() -> BaseGrammar {
  let nt_e = NonTerminal::new("E");
  let t_plus = Terminal::new("plus");
  let t_num = Terminal::new("num");
  build(&nt_e, |gb| {
    gb.add_rule(&nt_e, |rb| {
      rb.add_prod(|pb| {
        pb.add_nonterm(&nt_e).add_term(&t_plus).add_term(&t_num);
      })
      .add_prod(|pb| {
        pb.add_term(&t_num);
      });
    });
  })
}
