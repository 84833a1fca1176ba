use std::{error, fmt};

use backtrace::Backtrace;

/// A triangulation invariant was violated, which indicates either numerically
/// hostile input or a bug.
#[derive(Debug)]
pub struct InternalError {
    pub msg: String,
    pub backtrace: Backtrace,
}

impl InternalError {
    #[cold]
    #[inline(always)]
    pub(crate) fn new(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            backtrace: Backtrace::new_unresolved(),
        }
    }
}

impl fmt::Display for InternalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{:?}", self.msg, self.backtrace)
    }
}

impl error::Error for InternalError { }

/// Describes why a vertex could not be added to a [VoronoiDiagram](crate::VoronoiDiagram)
/// or [DelaunayTriangulation](crate::DelaunayTriangulation).
#[derive(Debug)]
#[non_exhaustive]
pub enum VoronoiError<V> {
    /// Two vertices share a position: the one already present, then the one being added.
    CoincidentVertices(V, V),
    /// See [InternalError].
    InternalError(InternalError),
}

impl<V> From<InternalError> for VoronoiError<V> {
    fn from(e: InternalError) -> Self {
        Self::InternalError(e)
    }
}

impl<V: fmt::Debug> fmt::Display for VoronoiError<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CoincidentVertices(existing, inserted) => write!(f, "Vertex {:?} coincides with existing vertex {:?}", inserted, existing),
            Self::InternalError(error) => fmt::Display::fmt(error, f),
        }
    }
}

impl<V: fmt::Debug> error::Error for VoronoiError<V> {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::InternalError(error) => Some(error),
            _ => None,
        }
    }
}
