//! C++ renderer module
//!
//! Generates the statements that configure one Rivet `Correlator`:
//! comment, declaration, setters, and the `Correlators` registration.

use std::io::Write;

use crate::error::Result;
use crate::models::{Range, Record};

/// C++ renderer for a correlator record
pub struct Renderer<'a> {
    record: &'a Record,
}

impl<'a> Renderer<'a> {
    pub fn new(record: &'a Record) -> Self {
        Self { record }
    }

    /// Render the record as ordered lines of C++
    pub fn render(&self) -> Vec<String> {
        let record = self.record;
        let mut lines = Vec::with_capacity(8);

        if !record.comment.is_empty() {
            lines.push(format!("// {}", record.comment));
        }

        lines.push(self.render_declaration());
        lines.push(format!(
            "{}.SetCollSystemAndEnergy({});",
            record.name, record.coll_system_and_energy
        ));
        lines.push(self.render_range_call("SetCentrality", &record.centrality));
        lines.push(self.render_range_call("SetTriggerRange", &record.trigger_range));
        lines.push(self.render_range_call("SetAssociatedRange", &record.associated_range));
        lines.push(self.render_range_call("SetAzimuthalRange", &record.azimuthal_range));
        lines.push(format!("Correlators.push_back({});", record.name));

        lines
    }

    /// Write the rendered lines to `out`
    pub fn write<W: Write>(&self, out: &mut W) -> Result<()> {
        for line in self.render() {
            writeln!(out, "{}", line)?;
        }
        out.flush()?;
        Ok(())
    }

    fn render_declaration(&self) -> String {
        match self.record.index {
            Some(index) => format!("Correlator {}({});", self.record.name, index),
            None => format!("Correlator {}();", self.record.name),
        }
    }

    fn render_range_call(&self, method: &str, range: &Range) -> String {
        format!(
            "{}.{}({}, {});",
            self.record.name,
            method,
            format_bound(range.min),
            format_bound(range.max)
        )
    }
}

/// Format a bound as a floating-point literal (`10.0`, not `10`)
fn format_bound(value: f64) -> String {
    format!("{:?}", value)
}
