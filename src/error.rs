use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(
        "kepler solver did not converge after {iterations} iterations (e = {eccentricity}, M = {mean_anomaly})"
    )]
    KeplerDivergence {
        eccentricity: f64,
        mean_anomaly: f64,
        iterations: usize,
    },
    #[error("state file error")]
    Io(#[from] std::io::Error),
    #[error("malformed state record")]
    Csv(#[from] csv::Error),
}
