/// Which flavour of Correlator code is generated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// `Correlator name();` with no index
    #[default]
    Plain,
    /// `Correlator name(index);` with an `:index` command and positional argument
    Indexed,
}

/// Session configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Code variant to generate
    pub variant: Variant,

    /// Display settings
    pub display: Display,
}

/// Display configuration
#[derive(Debug, Clone)]
pub struct Display {
    /// Allow styled help output (still requires a terminal on stdout)
    pub color: bool,
}

impl Config {
    /// Whether a bad interactive argument is reported and skipped instead of
    /// ending the session
    pub fn recovers_from_errors(&self) -> bool {
        self.variant == Variant::Indexed
    }
}

impl Default for Display {
    fn default() -> Self {
        Self { color: true }
    }
}
