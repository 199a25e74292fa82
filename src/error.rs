use crate::StrError;
use thiserror::Error;

/// Defines the errors raised by a convergence study
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The convergence test needs something to compare against
    #[error("at least two mesh refinements are required")]
    TooFewRefinements,

    /// Invalid configuration data
    #[error("configuration error: {0}")]
    Config(String),

    /// The name does not correspond to any available convergence measure
    #[error("the convergence measure {0:?} is not available")]
    UnknownMeasure(String),

    /// A measure depends on auxiliary data that has not been given
    #[error("the {measure} measure requires {input}")]
    MissingInput { measure: &'static str, input: &'static str },

    /// The measure exists but cannot be computed
    #[error("the {0} measure is not implemented")]
    NotImplemented(&'static str),

    /// Results were requested before the convergence test completed
    #[error("the convergence test has not been run yet")]
    NotRun,

    /// The convergence test has already been started with this instance
    #[error("the convergence test has already been run; create a new instance")]
    AlreadyRun,

    /// Failure reported by the solver, the mesh, or the function space
    #[error("{0}")]
    Upstream(String),

    /// Failure while saving a figure
    #[error("cannot save figure: {0}")]
    Plot(String),

    /// Failure while reading or writing files
    #[error("i/o error: {0}")]
    Io(String),
}

impl Error {
    /// Wraps an error message coming from a collaborator (solver, mesh, function space)
    pub(crate) fn upstream(message: StrError) -> Self {
        Error::Upstream(message.to_string())
    }

    /// Returns true if the error indicates invalid configuration data
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Error::TooFewRefinements | Error::Config(..) | Error::UnknownMeasure(..) | Error::MissingInput { .. }
        )
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
