use crate::utils::*;
use std::sync::Arc;

/// A logger type which is called with various information regarding the work done by an optimizer.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Specifies how agents of one iteration are distributed over threads.
#[derive(Clone, Default)]
pub struct Parallelism {
    thread_pool: Option<Arc<ThreadPool>>,
}

impl Parallelism {
    /// Creates a parallelism settings which runs work on a dedicated pool with `num_threads` threads.
    pub fn new(num_threads: usize) -> GenericResult<Self> {
        if num_threads == 0 {
            return Err(GenericError::invalid_config("amount of threads should be positive"));
        }

        Ok(Self { thread_pool: Some(Arc::new(ThreadPool::new(num_threads)?)) })
    }

    /// Returns amount of threads available for work.
    pub fn threads(&self) -> usize {
        self.thread_pool.as_ref().map_or_else(get_cpus, |pool| pool.threads())
    }

    /// Executes given operation either on a dedicated thread pool or on a global one.
    pub fn execute<OP, R>(&self, op: OP) -> R
    where
        OP: FnOnce() -> R + Send,
        R: Send,
    {
        match &self.thread_pool {
            Some(pool) => pool.execute(op),
            None => op(),
        }
    }
}

/// Keeps track of environment specific information which influences algorithm behavior.
#[derive(Clone)]
pub struct Environment {
    /// A wrapper on random generator.
    pub random: Arc<dyn Random>,

    /// A global execution quota, checked between iterations.
    pub quota: Option<Arc<dyn Quota + Send + Sync>>,

    /// Keeps data parallelism settings.
    pub parallelism: Parallelism,

    /// An information logger.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates an instance of `Environment` with default logger and no quota.
    pub fn new(random: Arc<dyn Random>) -> Self {
        Self { random, quota: None, parallelism: Parallelism::default(), logger: Arc::new(|msg| println!("{msg}")) }
    }

    /// Creates an instance of `Environment` which produces the same results for the same seed.
    pub fn new_repeatable(seed: u64) -> Self {
        Self::new(Arc::new(DefaultRandom::new_repeatable(seed)))
    }

    /// Creates an instance of `Environment` with wall clock time quota.
    pub fn new_with_time_quota(max_time: Option<usize>) -> Self {
        Self {
            quota: max_time.map::<Arc<dyn Quota + Send + Sync>, _>(|time| Arc::new(TimeQuota::new(time as Float))),
            ..Self::default()
        }
    }

    /// Returns true if the quota is defined and reached.
    pub fn is_quota_reached(&self) -> bool {
        self.quota.as_ref().is_some_and(|quota| quota.is_reached())
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new(Arc::new(DefaultRandom::default()))
    }
}
