use soroban_sdk::{contracttype, symbol_short, Env, String, Symbol};

use crate::config::GREETING_PREFIX;

// ===== EVENT TYPES =====

/// Record of an `invoke` or `query` entry, naming the requested function.
///
/// Written at the top of both entry points, before dispatch, so every
/// invocation leaves a trace regardless of which branch it takes.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InvocationEvent {
    /// Requested function name
    pub function: String,
    /// Invocation timestamp
    pub timestamp: u64,
}

/// Record of a greetee write, by `init` or `change`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GreeteeChangedEvent {
    /// Name now held in the world state
    pub greetee: String,
    /// Write timestamp
    pub timestamp: u64,
}

/// Record of a raw greetee read.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GreeteeReadEvent {
    /// Name read from the world state
    pub greetee: String,
    /// Read timestamp
    pub timestamp: u64,
}

/// Record of a greeting, rendered by clients as `"Hello <greetee>!"`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GreetingEvent {
    /// Constant greeting prefix
    pub greeting: String,
    /// Name being greeted
    pub greetee: String,
    /// Greeting timestamp
    pub timestamp: u64,
}

/// Record of a rejected function name.
///
/// Carries the name that failed to dispatch; the error value returned to the
/// host is a bare numeric code.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnknownFunctionEvent {
    /// Function name that failed to dispatch
    pub function: String,
    /// Rejection timestamp
    pub timestamp: u64,
}

// ===== EVENT EMISSION UTILITIES =====

/// Event emission utilities.
///
/// Diagnostics are best-effort and not part of the error contract: the host
/// rolls them back together with everything else when an invocation fails.
pub struct EventEmitter;

impl EventEmitter {
    /// Record an `invoke` entry
    pub fn emit_invoke_called(env: &Env, function: &String) {
        let event = InvocationEvent {
            function: function.clone(),
            timestamp: env.ledger().timestamp(),
        };

        Self::store_event(env, &symbol_short!("inv_call"), &event);
    }

    /// Record a `query` entry
    pub fn emit_query_called(env: &Env, function: &String) {
        let event = InvocationEvent {
            function: function.clone(),
            timestamp: env.ledger().timestamp(),
        };

        Self::store_event(env, &symbol_short!("qry_call"), &event);
    }

    /// Record an initialization of the greetee
    pub fn emit_greetee_initialized(env: &Env, greetee: &String) {
        let event = GreeteeChangedEvent {
            greetee: greetee.clone(),
            timestamp: env.ledger().timestamp(),
        };

        Self::store_event(env, &symbol_short!("grt_init"), &event);
    }

    /// Record a change of the greetee
    pub fn emit_greetee_changed(env: &Env, greetee: &String) {
        let event = GreeteeChangedEvent {
            greetee: greetee.clone(),
            timestamp: env.ledger().timestamp(),
        };

        Self::store_event(env, &symbol_short!("grt_chg"), &event);
    }

    /// Record a raw read of the greetee
    pub fn emit_greetee_read(env: &Env, greetee: &String) {
        let event = GreeteeReadEvent {
            greetee: greetee.clone(),
            timestamp: env.ledger().timestamp(),
        };

        Self::store_event(env, &symbol_short!("grt_read"), &event);
    }

    /// Record a greeting for the current greetee
    pub fn emit_greeting(env: &Env, greetee: &String) {
        let event = GreetingEvent {
            greeting: String::from_str(env, GREETING_PREFIX),
            greetee: greetee.clone(),
            timestamp: env.ledger().timestamp(),
        };

        Self::store_event(env, &symbol_short!("greet"), &event);
    }

    /// Record a rejected function name
    pub fn emit_unknown_function(env: &Env, function: &String) {
        let event = UnknownFunctionEvent {
            function: function.clone(),
            timestamp: env.ledger().timestamp(),
        };

        Self::store_event(env, &symbol_short!("unk_fn"), &event);
    }

    /// Store the latest record for a topic
    fn store_event<T>(env: &Env, event_key: &Symbol, event_data: &T)
    where
        T: Clone + soroban_sdk::IntoVal<soroban_sdk::Env, soroban_sdk::Val>,
    {
        env.storage().persistent().set(event_key, event_data);
    }
}
