//! Mapping from command-line toggles to stored project capabilities.
//!
//! Some flags turn a capability on (`--build`), others turn one off
//! (`--no-run`). [`CAPABILITY_FLAGS`] declares the polarity of every flag in
//! one place so the stored value never depends on a negation hidden at a call
//! site.

use super::Project;

/// A boolean capability stored on a [`Project`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Capability {
    Build,
    Bin,
    Run,
    Fmt,
    Test,
}

/// How a raw flag value maps onto its capability.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Polarity {
    /// The flag being set enables the capability.
    Enables,

    /// The flag being set disables the capability; absent means enabled.
    Disables,
}

impl Polarity {
    /// Stored capability value for a raw flag value.
    #[must_use]
    pub const fn apply(self, flag: bool) -> bool {
        match self {
            Self::Enables => flag,
            Self::Disables => !flag,
        }
    }
}

/// One row of the flag table.
#[derive(Clone, Copy, Debug)]
pub struct FlagMapping {
    /// Flag name as it appears on the command line, without dashes
    pub flag: &'static str,
    pub capability: Capability,
    pub polarity: Polarity,
}

/// Every capability flag the builder understands.
pub const CAPABILITY_FLAGS: [FlagMapping; 5] = [
    FlagMapping {
        flag: "build",
        capability: Capability::Build,
        polarity: Polarity::Enables,
    },
    FlagMapping {
        flag: "no-bin",
        capability: Capability::Bin,
        polarity: Polarity::Disables,
    },
    FlagMapping {
        flag: "no-run",
        capability: Capability::Run,
        polarity: Polarity::Disables,
    },
    FlagMapping {
        flag: "no-fmt",
        capability: Capability::Fmt,
        polarity: Polarity::Disables,
    },
    FlagMapping {
        flag: "test",
        capability: Capability::Test,
        polarity: Polarity::Enables,
    },
];

impl Capability {
    /// Set this capability on `project`.
    pub fn set(self, project: &mut Project, value: bool) {
        let slot = match self {
            Self::Build => &mut project.build,
            Self::Bin => &mut project.bin,
            Self::Run => &mut project.run,
            Self::Fmt => &mut project.fmt,
            Self::Test => &mut project.test,
        };
        *slot = value;
    }
}
