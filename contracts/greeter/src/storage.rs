use soroban_sdk::{Env, String, Symbol};

use crate::config::GREETEE_STORAGE_KEY;
use crate::errors::Error;

/// Accessor for the single world-state record this contract owns.
///
/// The record lives in the host's persistent storage under the
/// [`GREETEE_STORAGE_KEY`] key. The handle passed in is scoped to the
/// current invocation; the contract keeps nothing in memory between calls.
pub struct GreeteeStore;

impl GreeteeStore {
    /// Write the greetee name into the world state.
    pub fn set(env: &Env, greetee: &String) {
        env.storage().persistent().set(&Self::key(env), greetee);
    }

    /// Read the current greetee name from the world state.
    ///
    /// The record is absent until `init` has run; an absent or unreadable
    /// value surfaces as [`Error::StorageError`].
    pub fn get(env: &Env) -> Result<String, Error> {
        env.storage()
            .persistent()
            .get(&Self::key(env))
            .ok_or(Error::StorageError)
    }

    /// Whether the greetee record exists.
    pub fn has(env: &Env) -> bool {
        env.storage().persistent().has(&Self::key(env))
    }

    fn key(env: &Env) -> Symbol {
        Symbol::new(env, GREETEE_STORAGE_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GreeterContract;
    use soroban_sdk::Env;

    #[test]
    fn absent_until_written() {
        let env = Env::default();
        let contract_id = env.register_contract(None, GreeterContract);

        env.as_contract(&contract_id, || {
            assert!(!GreeteeStore::has(&env));
            assert_eq!(GreeteeStore::get(&env), Err(Error::StorageError));

            let name = String::from_str(&env, "Ada");
            GreeteeStore::set(&env, &name);

            assert!(GreeteeStore::has(&env));
            assert_eq!(GreeteeStore::get(&env), Ok(name));
        });
    }
}
