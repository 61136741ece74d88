use soroban_sdk::{Env, String};

use crate::errors::Error;

/// State-changing functions reachable through `invoke`.
///
/// Function names arrive over the wire as strings and are mapped to commands
/// at the boundary, so the handlers can match exhaustively. Unknown names
/// are rejected with [`Error::UnknownFunction`] before any state is touched.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum InvokeCommand {
    /// Reset the greetee to the default value. Used as a reset.
    Init,
    /// Replace the greetee with the supplied name.
    Change,
}

impl InvokeCommand {
    /// Map a wire-level function name to a command.
    pub fn parse(env: &Env, function: &String) -> Result<Self, Error> {
        if *function == String::from_str(env, "init") {
            Ok(InvokeCommand::Init)
        } else if *function == String::from_str(env, "change") {
            Ok(InvokeCommand::Change)
        } else {
            Err(Error::UnknownFunction)
        }
    }
}

/// Read-only functions reachable through `query`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum QueryCommand {
    /// Record the raw greetee name.
    Read,
    /// Record a greeting for the current greetee.
    Greet,
}

impl QueryCommand {
    /// Map a wire-level function name to a command.
    pub fn parse(env: &Env, function: &String) -> Result<Self, Error> {
        if *function == String::from_str(env, "read") {
            Ok(QueryCommand::Read)
        } else if *function == String::from_str(env, "greet") {
            Ok(QueryCommand::Greet)
        } else {
            Err(Error::UnknownFunction)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::Env;

    #[test]
    fn parses_invoke_commands() {
        let env = Env::default();

        assert_eq!(
            InvokeCommand::parse(&env, &String::from_str(&env, "init")),
            Ok(InvokeCommand::Init)
        );
        assert_eq!(
            InvokeCommand::parse(&env, &String::from_str(&env, "change")),
            Ok(InvokeCommand::Change)
        );
        assert_eq!(
            InvokeCommand::parse(&env, &String::from_str(&env, "transfer")),
            Err(Error::UnknownFunction)
        );
    }

    #[test]
    fn parses_query_commands() {
        let env = Env::default();

        assert_eq!(
            QueryCommand::parse(&env, &String::from_str(&env, "read")),
            Ok(QueryCommand::Read)
        );
        assert_eq!(
            QueryCommand::parse(&env, &String::from_str(&env, "greet")),
            Ok(QueryCommand::Greet)
        );
        // invoke names are not query names
        assert_eq!(
            QueryCommand::parse(&env, &String::from_str(&env, "change")),
            Err(Error::UnknownFunction)
        );
    }
}
