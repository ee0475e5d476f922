use thiserror::Error;

macro_rules! read_format_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::ReadFormat {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::ReadFormat {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// This enum covers all error conditions that can occur while constructing graphs from the
/// text format, mutating the index-addressable priority queue or union-find, or reading from
/// an empty structure. Each variant provides specific context about the failure mode.
///
/// # Error Categories
///
/// ## Graph Construction Errors
/// - [`Error::ReadFormat`] - Malformed text input or declared/parsed edge count mismatch
///
/// ## Structure Mutation Errors
/// - [`Error::IndexOutOfRange`] - Identifier outside a structure's fixed universe
/// - [`Error::DuplicateIndex`] - Re-inserting an identifier that is already present
/// - [`Error::MissingIndex`] - Addressing an identifier that is not present
///
/// ## Structure Access Errors
/// - [`Error::Empty`] - Reading or removing the top of an empty priority queue
/// - [`Error::NotComparable`] - An ordering is required but unavailable
///
/// # Examples
///
/// ```rust
/// use gryph::{Error, Graph, Orientation};
///
/// match Graph::parse("2\n3\n0 1\n", Orientation::Undirected) {
///     Ok(graph) => println!("{} edges", graph.edge_count()),
///     Err(Error::ReadFormat { message, .. }) => eprintln!("bad input: {}", message),
///     Err(e) => eprintln!("other error: {}", e),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The text input is damaged and could not be parsed into a graph.
    ///
    /// This error indicates that the input does not conform to the expected
    /// format (vertex count, edge count, one edge per line), that an edge
    /// references a vertex outside `0..V`, or that the number of parsed edges
    /// does not match the declared count. The error includes the source
    /// location where the malformation was detected for debugging purposes.
    ///
    /// # Fields
    ///
    /// * `message` - Detailed description of what was malformed
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Read format - {file}:{line}: {message}")]
    ReadFormat {
        /// The message to be printed for the ReadFormat error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// An identifier lies outside the fixed universe of the structure.
    ///
    /// Index priority queues and union-find instances are created over a fixed
    /// universe `0..bound`; any operation addressing an identifier at or beyond
    /// that bound is rejected eagerly, before any state is touched.
    #[error("Index {index} is outside the universe 0..{bound}")]
    IndexOutOfRange {
        /// The offending identifier
        index: usize,
        /// The exclusive upper bound of the universe
        bound: usize,
    },

    /// The identifier is already present in the index priority queue.
    ///
    /// Each identifier of the universe may occupy at most one heap position;
    /// inserting it a second time is rejected. Use
    /// [`IndexHeap::change_key`](crate::collections::IndexHeap::change_key)
    /// to replace the key of a live identifier.
    #[error("Index {0} is already present")]
    DuplicateIndex(usize),

    /// The identifier is not present in the index priority queue.
    ///
    /// Key replacement and removal address a live identifier; addressing one
    /// that was never inserted (or has already been removed) is rejected.
    #[error("Index {0} is not present")]
    MissingIndex(usize),

    /// Reading or removing the top of an empty structure.
    ///
    /// Returned by the priority queue's peek and pop operations when no
    /// elements are live.
    #[error("Operation on an empty structure")]
    Empty,

    /// An ordering is required but no total ordering is available.
    ///
    /// Edge weights must admit a total order; a NaN weight is rejected at
    /// construction so that every comparison performed later is defined.
    #[error("Value does not admit a total ordering")]
    NotComparable,
}
