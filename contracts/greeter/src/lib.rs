#![no_std]

pub mod config;
pub mod dispatch;
pub mod errors;
pub mod events;
pub mod storage;
pub mod validation;

use soroban_sdk::{contract, contractimpl, Env, String, Vec};

use crate::config::{CHANGE_EXPECTED_ARGS, DEFAULT_GREETEE};
use crate::dispatch::{InvokeCommand, QueryCommand};
use crate::errors::Error;
use crate::events::EventEmitter;
use crate::storage::GreeteeStore;
use crate::validation::InputValidator;

/// Greeter contract: keeps a single greetee name in the world state and
/// greets whoever it currently names.
///
/// The wire contract is string-based. `invoke` and `query` take a function
/// name plus a list of string arguments and dispatch internally on parsed
/// commands; everything else (persistence, transaction isolation, commit
/// and rollback) belongs to the host runtime.
#[contract]
pub struct GreeterContract;

#[contractimpl]
impl GreeterContract {
    /// Initialize the world state with the default greetee.
    pub fn init(env: Env, args: Vec<String>) -> Result<(), Error> {
        // 'init' takes no arguments
        InputValidator::require_no_args(&args)?;

        let greetee = String::from_str(&env, DEFAULT_GREETEE);
        GreeteeStore::set(&env, &greetee);
        EventEmitter::emit_greetee_initialized(&env, &greetee);

        Ok(())
    }

    /// Run a state-changing function against the world state.
    pub fn invoke(env: Env, function: String, args: Vec<String>) -> Result<(), Error> {
        EventEmitter::emit_invoke_called(&env, &function);

        let command = match InvokeCommand::parse(&env, &function) {
            Ok(command) => command,
            Err(err) => {
                EventEmitter::emit_unknown_function(&env, &function);
                return Err(err);
            }
        };

        match command {
            InvokeCommand::Init => {
                // Used as a reset. The nested result, errors included, never
                // reaches the caller; this branch always reports success.
                let _ = Self::init(env.clone(), args);
                Ok(())
            }
            InvokeCommand::Change => {
                // Mandatory single argument names the new greetee
                InputValidator::require_args(&args, CHANGE_EXPECTED_ARGS)?;
                let greetee = args.get(0).ok_or(Error::InvalidArgumentCount)?;

                GreeteeStore::set(&env, &greetee);
                EventEmitter::emit_greetee_changed(&env, &greetee);
                Ok(())
            }
        }
    }

    /// Run a read-only function against the world state.
    pub fn query(env: Env, function: String, args: Vec<String>) -> Result<(), Error> {
        EventEmitter::emit_query_called(&env, &function);

        // Query functions take no arguments
        InputValidator::require_no_args(&args)?;

        // Every query starts from the current greetee
        let greetee = GreeteeStore::get(&env)?;

        match QueryCommand::parse(&env, &function) {
            Ok(QueryCommand::Read) => {
                EventEmitter::emit_greetee_read(&env, &greetee);
                Ok(())
            }
            Ok(QueryCommand::Greet) => {
                EventEmitter::emit_greeting(&env, &greetee);
                Ok(())
            }
            Err(err) => {
                EventEmitter::emit_unknown_function(&env, &function);
                Err(err)
            }
        }
    }
}
