use soroban_sdk::contracterror;

/// Error codes for the greeter contract.
///
/// Each error carries a unique numeric code, grouped by category:
///
/// **Invocation Errors (100-199):** malformed requests rejected before any
/// state is touched.
///
/// **Storage Errors (200-299):** world-state access failures.
///
/// Errors are returned to the host caller immediately and are never retried
/// or recovered internally.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // ===== INVOCATION ERRORS =====
    /// Wrong number of arguments for the requested function
    InvalidArgumentCount = 100,
    /// Function name not known to this contract
    UnknownFunction = 101,

    // ===== STORAGE ERRORS =====
    /// World-state read failed or the greetee record is absent
    StorageError = 200,
}

impl Error {
    /// Symbolic code for structured diagnostics and monitoring.
    pub fn code(&self) -> &'static str {
        match self {
            Error::InvalidArgumentCount => "INVALID_ARGUMENT_COUNT",
            Error::UnknownFunction => "UNKNOWN_FUNCTION",
            Error::StorageError => "STORAGE_ERROR",
        }
    }

    /// Human-readable description of the error.
    pub fn description(&self) -> &'static str {
        match self {
            Error::InvalidArgumentCount => "Incorrect number of arguments for this function",
            Error::UnknownFunction => "Called with an unknown function name",
            Error::StorageError => "Failed to get state for the greetee record",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes_are_categorized() {
        // invocation errors
        assert_eq!(Error::InvalidArgumentCount as u32, 100);
        assert_eq!(Error::UnknownFunction as u32, 101);
        // storage errors
        assert_eq!(Error::StorageError as u32, 200);
    }

    #[test]
    fn codes_and_descriptions_are_consistent() {
        assert_eq!(Error::InvalidArgumentCount.code(), "INVALID_ARGUMENT_COUNT");
        assert_eq!(Error::UnknownFunction.code(), "UNKNOWN_FUNCTION");
        assert_eq!(Error::StorageError.code(), "STORAGE_ERROR");

        assert_eq!(
            Error::UnknownFunction.description(),
            "Called with an unknown function name"
        );
        assert_eq!(
            Error::StorageError.description(),
            "Failed to get state for the greetee record"
        );
    }
}
