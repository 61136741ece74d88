//! Named constants for the greeter contract.

// ===== STORAGE KEYS =====

/// World-state key holding the current greetee name.
pub const GREETEE_STORAGE_KEY: &str = "greetee";

// ===== GREETING CONSTANTS =====

/// Greetee written by `init` before anyone has been named.
pub const DEFAULT_GREETEE: &str = "mysterious person!";

/// Prefix of every greeting.
pub const GREETING_PREFIX: &str = "Hello";

// ===== ARGUMENT COUNTS =====

/// Arguments expected by `change`: the new greetee name.
pub const CHANGE_EXPECTED_ARGS: u32 = 1;
