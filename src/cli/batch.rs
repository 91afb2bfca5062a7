use std::io;

use tracing::warn;

use crate::config::{Config, Variant};
use crate::error::Result;
use crate::models::{Field, Record};
use crate::renderer::Renderer;

/// Positional order without an index
const PLAIN_FIELDS: [Field; 7] = [
    Field::Name,
    Field::CollSystemAndEnergy,
    Field::Centrality,
    Field::TriggerRange,
    Field::AssociatedRange,
    Field::AzimuthalRange,
    Field::Comment,
];

/// Positional order with the index after the name
const INDEXED_FIELDS: [Field; 8] = [
    Field::Name,
    Field::Index,
    Field::CollSystemAndEnergy,
    Field::Centrality,
    Field::TriggerRange,
    Field::AssociatedRange,
    Field::AzimuthalRange,
    Field::Comment,
];

/// Render one Correlator from positional values
pub fn run(config: &Config, values: &[String]) -> Result<()> {
    let record = build_record(config.variant, values)?;

    let mut stdout = io::stdout().lock();
    Renderer::new(&record).write(&mut stdout)
}

/// Build a fully populated record, failing on the first missing or
/// malformed value
pub fn build_record(variant: Variant, values: &[String]) -> Result<Record> {
    let fields: &[Field] = match variant {
        Variant::Plain => &PLAIN_FIELDS,
        Variant::Indexed => &INDEXED_FIELDS,
    };

    let mut record = Record::new(variant);
    for (position, field) in fields.iter().enumerate() {
        record.set(*field, values.get(position).map(String::as_str))?;
    }

    if values.len() > fields.len() {
        warn!(
            "Ignoring {} extra argument(s): {:?}",
            values.len() - fields.len(),
            &values[fields.len()..]
        );
    }

    Ok(record)
}
