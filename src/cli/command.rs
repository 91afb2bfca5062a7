use crate::config::Variant;
use crate::error::{Result, WriterError};
use crate::models::Field;

/// An interactive command, keyed by the first token of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    Write,
    /// Write, then quit
    Exit,
    Help,
    Set(Field),
}

impl Command {
    /// Look up a command token, including its aliases.
    ///
    /// `:index` only exists in the indexed variant.
    pub fn parse(token: &str, variant: Variant) -> Result<Self> {
        let command = match token {
            ":quit" | ":q" => Command::Quit,
            ":write" | ":w" => Command::Write,
            ":x" => Command::Exit,
            ":h" | ":help" => Command::Help,
            ":name" => Command::Set(Field::Name),
            ":index" if variant == Variant::Indexed => Command::Set(Field::Index),
            ":coll_system_and_energy" | ":CollSystemAndEnergy" | ":cse" => {
                Command::Set(Field::CollSystemAndEnergy)
            }
            ":centrality" | ":cen" => Command::Set(Field::Centrality),
            ":trigger_range" | ":trr" => Command::Set(Field::TriggerRange),
            ":associated_range" | ":asr" => Command::Set(Field::AssociatedRange),
            ":azimuthal_range" | ":azr" => Command::Set(Field::AzimuthalRange),
            ":comment" | ":com" => Command::Set(Field::Comment),
            _ => return Err(WriterError::UnknownCommand(token.to_string())),
        };

        Ok(command)
    }
}

/// Help text for the interactive session (Markdown)
pub fn help_text(variant: Variant) -> String {
    let mut text = String::from(
        "# Correlator writer\n\n\
         Commands take the form `:command [argument]`. Ranges are written `min..max`.\n\n\
         ## Actions\n\n\
         - `:w`, `:write`: print the Correlator code\n\
         - `:x`: print the code and quit\n\
         - `:q`, `:quit`: quit without printing\n\
         - `:h`, `:help`: show this help\n\n\
         ## Fields\n\n\
         - `:name <identifier>`\n",
    );

    if variant == Variant::Indexed {
        text.push_str("- `:index <integer>`\n");
    }

    text.push_str(
        "- `:cse`, `:coll_system_and_energy`, `:CollSystemAndEnergy <expression>`\n\
         - `:cen`, `:centrality <min..max>`\n\
         - `:trr`, `:trigger_range <min..max>`\n\
         - `:asr`, `:associated_range <min..max>`\n\
         - `:azr`, `:azimuthal_range <min..max>`\n\
         - `:com`, `:comment <text>`\n",
    );

    text
}
