// src/utils/id.rs

use rand::{Rng, distributions::Alphanumeric};

/// Generated test IDs are always this long.
pub const TEST_ID_LEN: usize = 10;

/// Capability for producing fresh opaque identifiers.
///
/// Handed to the handlers as a process-scoped instance rather than reached
/// for as ambient global state, so tests can inject a deterministic one.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Produces IDs drawn uniformly from `[A-Za-z0-9]`.
#[derive(Debug, Default)]
pub struct RandomIdGenerator;

impl RandomIdGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl IdGenerator for RandomIdGenerator {
    fn generate(&self) -> String {
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(TEST_ID_LEN)
            .map(char::from)
            .collect()
    }
}
