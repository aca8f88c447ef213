use clap::ValueEnum;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Colors when stdout is a terminal and NO_COLOR is unset.
    Auto,
    Always,
    Never,
}
