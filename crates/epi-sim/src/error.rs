use epi_params::ParamsError;
use epi_sweeps::SweepError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// The run configuration is unusable as given.
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("sweep failed: {0}")]
    Sweep(#[from] SweepError),

    #[error("invalid parameters: {0}")]
    Params(#[from] ParamsError),

    #[error("csv output error: {0}")]
    Csv(#[from] csv::Error),
}

pub type SimResult<T> = Result<T, SimError>;
