use soroban_sdk::{Env, Symbol};

use crate::errors::EngineError;

/// Re-entry guard held for the duration of one top-level mutating call.
///
/// The flag is global per call, not per user: a collaborator contract (a
/// token or a price feed) that calls back into the engine mid-operation hits
/// the flag and fails with `Reentrancy`.
pub struct ReentrancyGuard<'a> {
    env: &'a Env,
}

impl<'a> ReentrancyGuard<'a> {
    pub fn new(env: &'a Env) -> Result<Self, EngineError> {
        let key = Symbol::new(env, "REENTRANCY_LOCK");
        if env.storage().temporary().has(&key) {
            return Err(EngineError::Reentrancy);
        }
        env.storage().temporary().set(&key, &true);
        Ok(Self { env })
    }
}

impl<'a> Drop for ReentrancyGuard<'a> {
    fn drop(&mut self) {
        let key = Symbol::new(self.env, "REENTRANCY_LOCK");
        self.env.storage().temporary().remove(&key);
    }
}
