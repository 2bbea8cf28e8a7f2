//! Configuration and system parameters for the engines

/// Default cap on fixpoint rounds for closure computations
pub const DEFAULT_MAX_CLOSURE_ITERATIONS: usize = 10_000;

/// Default number of non-empty rows before a product is split across threads
pub const DEFAULT_PARALLEL_ROW_THRESHOLD: usize = 64;

/// System parameters for performance tuning
#[derive(Debug, Clone)]
pub struct SystemParameters {
    /// Number of threads to use
    pub n_threads: usize,
}

impl Default for SystemParameters {
    fn default() -> Self {
        Self {
            n_threads: num_cpus::get(), // Use all available cores
        }
    }
}

/// Configuration shared by the matrix and graph engines
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// System parameters for performance tuning
    pub system_params: SystemParameters,

    /// Minimum number of non-empty left rows before `mul_parallel` fans out
    pub parallel_row_threshold: usize,

    /// Upper bound on fixpoint rounds per closure computation
    /// If None, iteration continues until the labels stabilise
    pub max_closure_iterations: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            system_params: SystemParameters::default(),
            parallel_row_threshold: DEFAULT_PARALLEL_ROW_THRESHOLD,
            max_closure_iterations: Some(DEFAULT_MAX_CLOSURE_ITERATIONS),
        }
    }
}

impl EngineConfig {
    /// Create a single-threaded config
    pub fn sequential() -> Self {
        Self {
            system_params: SystemParameters { n_threads: 1 },
            ..Self::default()
        }
    }

    /// Create a config without an iteration cap
    pub fn unbounded() -> Self {
        Self {
            max_closure_iterations: None,
            ..Self::default()
        }
    }

    /// Whether a product with `busy_rows` non-empty rows should run on rayon
    pub fn use_parallel(&self, busy_rows: usize) -> bool {
        self.system_params.n_threads > 1 && busy_rows >= self.parallel_row_threshold
    }

    /// Whether `iterations` rounds exceed the configured cap
    pub fn exceeds_cap(&self, iterations: usize) -> bool {
        self.max_closure_iterations
            .map_or(false, |cap| iterations >= cap)
    }
}
