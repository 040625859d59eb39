use anyhow::anyhow;

/// Canonical maintenance mode strings, least to most permissive.
pub const VALID_MODES: &[&str] = &["--", "r-", "rw"];

/// Operational capability state of the whole service: whether read and
/// write requests are currently permitted. Set by the operator, re-read
/// on every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaintenanceMode {
    /// "--": fully blocked.
    NoReadOrWrite,
    /// "r-": read-only.
    ReadOnly,
    /// "rw": normal operation.
    ReadWrite,
}

impl MaintenanceMode {
    /// Parse a configured mode string. Anything outside VALID_MODES is an
    /// operator misconfiguration, never a silently accepted mode.
    pub fn parse(value: &str) -> Result<Self, ModeError> {
        match value {
            "--" => Ok(Self::NoReadOrWrite),
            "r-" => Ok(Self::ReadOnly),
            "rw" => Ok(Self::ReadWrite),
            _ => Err(ModeError::BadConfig {
                configured: value.to_string(),
            }),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::NoReadOrWrite => "--",
            Self::ReadOnly => "r-",
            Self::ReadWrite => "rw",
        }
    }

    pub fn allows_read(self) -> bool {
        !matches!(self, Self::NoReadOrWrite)
    }

    pub fn allows_write(self) -> bool {
        matches!(self, Self::ReadWrite)
    }

    /// Whether every capability the requirement names is currently granted.
    pub fn satisfies(self, required: AccessRequirement) -> bool {
        match required {
            AccessRequirement::Read => self.allows_read(),
            AccessRequirement::ReadWrite => self.allows_read() && self.allows_write(),
        }
    }
}

/// The minimum mode a handler needs to run. "--" is not representable
/// here: a handler that needs no capability at all has no business being
/// mode-gated, so the conversion from a mode value rejects it at
/// registration time rather than on the first request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessRequirement {
    /// Needs reads, indifferent to writes ("r-").
    Read,
    /// Needs reads and writes ("rw").
    ReadWrite,
}

impl AccessRequirement {
    pub fn as_mode(self) -> MaintenanceMode {
        match self {
            Self::Read => MaintenanceMode::ReadOnly,
            Self::ReadWrite => MaintenanceMode::ReadWrite,
        }
    }
}

impl TryFrom<MaintenanceMode> for AccessRequirement {
    type Error = anyhow::Error;

    fn try_from(mode: MaintenanceMode) -> Result<Self, Self::Error> {
        match mode {
            MaintenanceMode::ReadOnly => Ok(Self::Read),
            MaintenanceMode::ReadWrite => Ok(Self::ReadWrite),
            MaintenanceMode::NoReadOrWrite => {
                Err(anyhow!("A handler cannot require maintenance mode '--'"))
            }
        }
    }
}

/// Why a gated request may not proceed. The two variants must stay
/// distinguishable at the HTTP layer: a deliberate block and an operator
/// misconfiguration are different incidents even though both answer 503.
#[derive(Debug, PartialEq, Eq)]
pub enum ModeError {
    /// The configured mode does not grant what the handler requires.
    Maintenance,
    /// The configured mode is not one of VALID_MODES.
    BadConfig { configured: String },
}

/// Decide whether a handler requiring `required` may run under the
/// configured mode string. Validation short-circuits before any
/// capability comparison.
pub fn evaluate(required: AccessRequirement, configured: &str) -> Result<(), ModeError> {
    let mode = MaintenanceMode::parse(configured)?;
    if mode.satisfies(required) {
        Ok(())
    } else {
        Err(ModeError::Maintenance)
    }
}
