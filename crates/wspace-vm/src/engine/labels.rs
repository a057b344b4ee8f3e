//! Lazily built label table.
//!
//! Labels are recorded two ways: when a `mark` executes, and when a lookup misses and
//! the program is scanned forward for marks. Either way the first mark for an id wins.
//! The scan keeps a cursor, so each instruction is scanned at most once per run.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use wspace_bytecode::{FlowOp, LiteralError, Opcode, Program, Tracer};

#[derive(Debug, Default)]
pub(crate) struct LabelTable {
    targets: HashMap<i64, usize>,
    /// Instructions before this index have been scanned.
    scanned: usize,
}

impl LabelTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, label: i64) -> Option<usize> {
        self.targets.get(&label).copied()
    }

    /// Record `label` as resuming at `target` unless it is already known.
    ///
    /// Returns true if the label was newly recorded.
    pub fn record<T: Tracer>(&mut self, label: i64, target: usize, tracer: &mut T) -> bool {
        match self.targets.entry(label) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(target);
                tracer.trace_label(label, target);
                true
            }
        }
    }

    /// Look up `label`, scanning the unscanned tail of `program` on a miss.
    ///
    /// Every mark passed during the scan is recorded. The scan stops right after the
    /// mark for `label`. `Ok(None)` means the whole program holds no such mark.
    pub fn resolve<T: Tracer>(
        &mut self,
        program: &Program,
        label: i64,
        tracer: &mut T,
    ) -> Result<Option<usize>, LiteralError> {
        if let Some(target) = self.get(label) {
            return Ok(Some(target));
        }

        while let Some(instr) = program.get(self.scanned) {
            let index = self.scanned;
            self.scanned += 1;

            if instr.opcode() != Opcode::Flow(FlowOp::Mark) {
                continue;
            }
            let mark = instr
                .parameter()
                .expect("mark always carries a label")
                .decode()?;
            self.record(mark, index + 1, tracer);
            if mark == label {
                return Ok(self.get(label));
            }
        }

        Ok(None)
    }
}
