use crate::config::Variant;
use crate::error::Result;
use crate::parser;

/// Pair of floating-point bounds given as `min..max`.
///
/// No ordering is enforced; inverted ranges are kept as given.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

/// A settable field of the record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Comment,
    Name,
    Index,
    CollSystemAndEnergy,
    Centrality,
    TriggerRange,
    AssociatedRange,
    AzimuthalRange,
}

impl Field {
    /// Field name used in error messages
    pub fn label(self) -> &'static str {
        match self {
            Field::Comment => "comment",
            Field::Name => "name",
            Field::Index => "index",
            Field::CollSystemAndEnergy => "coll_system_and_energy",
            Field::Centrality => "centrality",
            Field::TriggerRange => "trigger_range",
            Field::AssociatedRange => "associated_range",
            Field::AzimuthalRange => "azimuthal_range",
        }
    }
}

/// Settings for one generated Correlator block
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    /// Leading comment (omitted from output when empty)
    pub comment: String,
    /// C++ identifier of the correlator, used verbatim
    pub name: String,
    /// Constructor argument, present only in the indexed variant
    pub index: Option<i64>,
    /// Collision system expression, rendered unquoted
    pub coll_system_and_energy: String,
    pub centrality: Range,
    pub trigger_range: Range,
    pub associated_range: Range,
    pub azimuthal_range: Range,
}

impl Record {
    /// Empty record for the given variant
    pub fn new(variant: Variant) -> Self {
        Self {
            index: match variant {
                Variant::Plain => None,
                Variant::Indexed => Some(0),
            },
            ..Self::default()
        }
    }

    /// Parse `value` for `field` and store it.
    ///
    /// The record is only touched once parsing has succeeded.
    pub fn set(&mut self, field: Field, value: Option<&str>) -> Result<()> {
        let label = field.label();

        match field {
            Field::Comment => self.comment = parser::parse_string(value, label)?,
            Field::Name => self.name = parser::parse_string(value, label)?,
            Field::Index => self.index = Some(parser::parse_integer(value, label)?),
            Field::CollSystemAndEnergy => {
                self.coll_system_and_energy = parser::parse_string(value, label)?
            }
            Field::Centrality => self.centrality = parse_range_arg(value, label)?,
            Field::TriggerRange => self.trigger_range = parse_range_arg(value, label)?,
            Field::AssociatedRange => self.associated_range = parse_range_arg(value, label)?,
            Field::AzimuthalRange => self.azimuthal_range = parse_range_arg(value, label)?,
        }

        Ok(())
    }
}

fn parse_range_arg(value: Option<&str>, label: &str) -> Result<Range> {
    let text = parser::parse_string(value, label)?;
    parser::parse_range(&text)
}
