use thiserror::Error;

/// Errors that can occur when driving an environment or a search run.
#[derive(Debug, Error)]
pub enum EnvError {
    #[error("episode is already over; reset the environment before stepping")]
    EpisodeOver,
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
}
