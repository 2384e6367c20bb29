use core::fmt::{self, Debug, Display};

/// Error returned when a graph operation is rejected.
///
/// All variants are recoverable validation failures. A mutation that returns
/// an error has left the graph exactly as it was.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error<T> {
    /// A vertex with this label is already present.
    VertexExists(T),
    /// No vertex carries this label.
    VertexNotFound(T),
    /// Both endpoints of the requested edge are the same vertex.
    SelfLoop(T),
    /// The two vertices are already joined by an edge.
    EdgeExists(T, T),
    /// The two vertices exist but are not joined by an edge.
    EdgeNotFound(T, T),
    /// `end` is not reachable from `start`.
    NoPath { start: T, end: T },
}

impl<T> Display for Error<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VertexExists(label) => write!(f, "Vertex \"{label}\" already exists."),
            Self::VertexNotFound(label) => write!(f, "Vertex \"{label}\" does not exist."),
            Self::SelfLoop(label) => write!(f, "Cannot add a self-loop on \"{label}\"."),
            Self::EdgeExists(a, b) => {
                write!(f, "Edge between \"{a}\" and \"{b}\" already exists.")
            }
            Self::EdgeNotFound(a, b) => write!(f, "No edge exists between \"{a}\" and \"{b}\"."),
            Self::NoPath { start, end } => {
                write!(f, "No path exists from \"{start}\" to \"{end}\".")
            }
        }
    }
}

impl<T> core::error::Error for Error<T> where T: Debug + Display {}
