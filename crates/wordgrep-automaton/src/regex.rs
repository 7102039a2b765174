//! Regex compilation by operator precedence.
//!
//! Grammar, lowest binding first:
//!
//! | syntax   | meaning                                   | precedence |
//! |----------|-------------------------------------------|-----------:|
//! | `a # b`  | cartesian product (interleave)             | -2 |
//! | `a & b`  | tensor product (both accept)               | -2 |
//! | `a \| b` | alternation                                | -1 |
//! | `ab`     | concatenation (implicit)                   | 0 |
//! | `a*` `a+` `a?` | repetition                           | 1 |
//!
//! Letters match case-insensitively and `.` matches any letter. Parentheses
//! group. Operators of equal precedence associate to the left.
//!
//! The parser keeps one `Frame` per open parenthesis. A frame starts with
//! the empty automaton as its only operand; every token then pushes one
//! operator and one operand, so the operand stack always holds one more entry
//! than the operator stack. Postfix operators push the empty automaton as
//! their right operand and are applied as "repeat the left side, then
//! concatenate the right side".

use tracing::debug;

use crate::{Automaton, SpecError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Concat,
    KleeneStar,
    OneOrMore,
    ZeroOrOne,
    Alternation,
    CartesianProduct,
    TensorProduct,
}

/// Explicit operator symbols. Concatenation has no symbol.
pub const OPERATORS: [(char, Operator); 6] = [
    ('*', Operator::KleeneStar),
    ('+', Operator::OneOrMore),
    ('?', Operator::ZeroOrOne),
    ('|', Operator::Alternation),
    ('#', Operator::CartesianProduct),
    ('&', Operator::TensorProduct),
];

impl Operator {
    pub fn from_symbol(c: char) -> Option<Operator> {
        OPERATORS
            .iter()
            .find(|(symbol, _)| *symbol == c)
            .map(|(_, op)| *op)
    }

    pub fn precedence(self) -> i8 {
        match self {
            Operator::KleeneStar | Operator::OneOrMore | Operator::ZeroOrOne => 1,
            Operator::Concat => 0,
            Operator::Alternation => -1,
            Operator::CartesianProduct | Operator::TensorProduct => -2,
        }
    }

    pub fn apply(self, lhs: &Automaton, rhs: &Automaton) -> Automaton {
        match self {
            Operator::Concat => lhs.concat(rhs),
            Operator::KleeneStar => lhs.kleene_star().concat(rhs),
            Operator::OneOrMore => lhs.one_or_more().concat(rhs),
            Operator::ZeroOrOne => lhs.zero_or_one().concat(rhs),
            Operator::Alternation => lhs.alternation(rhs),
            Operator::CartesianProduct => lhs.cartesian_product(rhs),
            Operator::TensorProduct => lhs.tensor_product(rhs),
        }
    }
}

/// Operand and operator stacks for one parenthesised group.
struct Frame {
    operands: Vec<Automaton>,
    operators: Vec<Operator>,
    /// Byte position of the `(` that opened this frame; `None` at top level.
    open: Option<usize>,
}

impl Frame {
    fn new(open: Option<usize>) -> Self {
        Self {
            operands: vec![Automaton::empty()],
            operators: Vec::new(),
            open,
        }
    }

    fn push(&mut self, op: Operator, operand: Automaton) {
        while self
            .operators
            .last()
            .is_some_and(|top| top.precedence() >= op.precedence())
        {
            self.reduce_top();
        }
        self.operators.push(op);
        self.operands.push(operand);
    }

    fn reduce_top(&mut self) {
        let op = self
            .operators
            .pop()
            .expect("reduce_top is only called with a pending operator");
        let rhs = self.pop_operand();
        let lhs = self.pop_operand();
        self.operands.push(op.apply(&lhs, &rhs));
    }

    fn pop_operand(&mut self) -> Automaton {
        self.operands
            .pop()
            .expect("operand stack holds one more entry than the operator stack")
    }

    fn finish(mut self) -> Automaton {
        while !self.operators.is_empty() {
            self.reduce_top();
        }
        self.pop_operand()
    }
}

pub(crate) fn parse(regex: &str) -> Result<Automaton, SpecError> {
    let mut outer: Vec<Frame> = Vec::new();
    let mut frame = Frame::new(None);

    for (pos, c) in regex.char_indices() {
        match c {
            '(' => outer.push(std::mem::replace(&mut frame, Frame::new(Some(pos)))),
            ')' => {
                let Some(parent) = outer.pop() else {
                    return Err(SpecError::UnexpectedClose { pos });
                };
                let group = std::mem::replace(&mut frame, parent).finish();
                frame.push(Operator::Concat, group);
            }
            _ => match Operator::from_symbol(c) {
                Some(op) => frame.push(op, Automaton::empty()),
                None => frame.push(Operator::Concat, Automaton::from_char_at(c, pos)?),
            },
        }
    }

    if let Some(open) = frame.open {
        return Err(SpecError::MissingClose { pos: open });
    }

    let automaton = frame.finish();
    debug!(
        regex,
        states = automaton.len(),
        edges = automaton.edge_count(),
        "compiled regex"
    );
    Ok(automaton)
}
