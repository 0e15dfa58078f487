use strum::{Display, EnumString};

// Lowercase for RUST_LOG env var compatibility
#[derive(Clone, Copy, Debug, Default, Display, EnumString, PartialEq)]
#[strum(serialize_all = "lowercase")]
pub enum Verbosity {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}
