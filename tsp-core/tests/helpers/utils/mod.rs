pub use self::random::*;

use crate::utils::{Environment, InfoLogger, Random};
use std::sync::{Arc, Mutex};

/// Creates an environment which does not log anything and produces repeatable results.
pub fn create_test_environment(seed: u64) -> Arc<Environment> {
    Arc::new(Environment { logger: Arc::new(|_| {}), ..Environment::new_repeatable(seed) })
}

/// Creates an environment with the given random and silent logger.
pub fn create_test_environment_with_random(random: Arc<dyn Random>) -> Arc<Environment> {
    Arc::new(Environment { logger: Arc::new(|_| {}), ..Environment::new(random) })
}

/// Creates a logger which stores all messages into the returned buffer.
pub fn create_memory_logger() -> (InfoLogger, Arc<Mutex<Vec<String>>>) {
    let messages = Arc::new(Mutex::new(Vec::new()));
    let logger: InfoLogger = {
        let messages = messages.clone();
        Arc::new(move |msg: &str| messages.lock().unwrap().push(msg.to_string()))
    };

    (logger, messages)
}
