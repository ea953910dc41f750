use epi_core::{InfectionStatus, PersonId};
use epi_params::ParamsError;
use epi_pop::PopError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SweepError {
    /// A person's `time_of_status_change` came due with no pending status.
    /// State corruption: something scheduled a time without a target.
    #[error("person {person} has a due status change but no next status")]
    MissingNextStatus { person: PersonId },

    /// The delay sampler produced a negative delay, which would schedule a
    /// transition in the past.
    #[error("negative delay {delay} sampled for {from} -> {to}")]
    NegativeDelay {
        from:  InfectionStatus,
        to:    InfectionStatus,
        delay: f64,
    },

    /// The seeding sweep was asked for more initial infections than there
    /// are susceptible persons in its scope.
    #[error("cannot seed {requested} initial infections: only {susceptible} susceptible persons available")]
    TooManyInitialInfected { requested: usize, susceptible: usize },

    #[error(transparent)]
    Population(#[from] PopError),

    #[error(transparent)]
    Params(#[from] ParamsError),
}

pub type SweepResult<T> = Result<T, SweepError>;
