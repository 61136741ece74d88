use soroban_sdk::{String, Vec};

use crate::errors::Error;

/// Argument checks shared by the exported functions.
pub struct InputValidator;

impl InputValidator {
    /// Require an empty argument list.
    pub fn require_no_args(args: &Vec<String>) -> Result<(), Error> {
        Self::require_args(args, 0)
    }

    /// Require exactly `expected` arguments.
    pub fn require_args(args: &Vec<String>, expected: u32) -> Result<(), Error> {
        if args.len() != expected {
            return Err(Error::InvalidArgumentCount);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::{vec, Env};

    #[test]
    fn counts_arguments() {
        let env = Env::default();
        let empty: Vec<String> = Vec::new(&env);
        let one = vec![&env, String::from_str(&env, "x")];
        let two = vec![
            &env,
            String::from_str(&env, "x"),
            String::from_str(&env, "y"),
        ];

        assert_eq!(InputValidator::require_no_args(&empty), Ok(()));
        assert_eq!(
            InputValidator::require_no_args(&one),
            Err(Error::InvalidArgumentCount)
        );

        assert_eq!(InputValidator::require_args(&one, 1), Ok(()));
        assert_eq!(
            InputValidator::require_args(&empty, 1),
            Err(Error::InvalidArgumentCount)
        );
        assert_eq!(
            InputValidator::require_args(&two, 1),
            Err(Error::InvalidArgumentCount)
        );
    }
}
