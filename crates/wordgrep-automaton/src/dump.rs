//! Graphviz rendering of automata.
//!
//! Nodes are drawn as points: red for start, blue for accept, purple when a
//! node is both. Letter edges sharing a destination are merged into one label,
//! and runs of five or more consecutive letters are written as ranges, so
//! `.` renders as `[A-Z]`. Epsilon edges are labelled `ε`.

use std::fmt::Write;

use wordgrep_core::Letter;

use crate::{Automaton, StateId};

const EPSILON_LABEL: &str = "&#949;";

/// Runs shorter than this are spelled out letter by letter.
const MIN_RANGE_RUN: usize = 5;

pub struct DotPrinter<'a> {
    automaton: &'a Automaton,
}

impl<'a> DotPrinter<'a> {
    pub fn new(automaton: &'a Automaton) -> Self {
        Self { automaton }
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    fn format(&self, w: &mut String) -> std::fmt::Result {
        let a = self.automaton;
        writeln!(w, "digraph {{")?;
        writeln!(w, "  graph [rankdir=LR];")?;

        for id in 0..a.len() as StateId {
            write!(w, "  {id} [shape=point")?;
            match (id == a.start(), id == a.accept()) {
                (true, true) => write!(w, ",color=\"purple\"")?,
                (true, false) => write!(w, ",color=\"red\"")?,
                (false, true) => write!(w, ",color=\"blue\"")?,
                (false, false) => {}
            }
            writeln!(w, "];")?;
        }

        for (id, node) in (0..).zip(a.nodes()) {
            for (dest, letters) in group_by_dest(node.letter_edges().map(|(l, e)| (l, e.dest))) {
                writeln!(w, "  {id} -> {dest} [label=\"{}\"];", edge_label(&letters))?;
            }
            for edge in node.epsilons() {
                writeln!(w, "  {id} -> {} [label=\"{EPSILON_LABEL}\"];", edge.dest)?;
            }
        }

        writeln!(w, "}}")
    }
}

/// Groups letters by destination, ordered by each group's first letter.
fn group_by_dest(edges: impl Iterator<Item = (Letter, StateId)>) -> Vec<(StateId, Vec<Letter>)> {
    let mut groups: Vec<(StateId, Vec<Letter>)> = Vec::new();
    for (letter, dest) in edges {
        match groups.iter_mut().find(|(d, _)| *d == dest) {
            Some((_, letters)) => letters.push(letter),
            None => groups.push((dest, vec![letter])),
        }
    }
    groups
}

/// `letters` must be in alphabet order.
pub(crate) fn edge_label(letters: &[Letter]) -> String {
    let mut label = String::new();
    let mut run_start = 0;
    for i in 1..=letters.len() {
        let continues = i < letters.len()
            && letters[i].index() == letters[run_start].index() + (i - run_start);
        if continues {
            continue;
        }
        let run = &letters[run_start..i];
        if run.len() >= MIN_RANGE_RUN {
            label.push(run[0].to_char());
            label.push('-');
            label.push(run[run.len() - 1].to_char());
        } else {
            label.extend(run.iter().map(|l| l.to_char()));
        }
        run_start = i;
    }

    if label.len() > 1 {
        format!("[{label}]")
    } else {
        label
    }
}

impl Automaton {
    /// Graphviz `digraph` source for this automaton.
    pub fn dot(&self) -> String {
        DotPrinter::new(self).dump()
    }
}
