use core::fmt;

/// Errors reported by the sorted containers.
///
/// A failed operation never leaves a partial edit behind: the container is in
/// the same state it was before the call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An index argument was outside `[0, len)`.
    IndexOutOfBounds { index: usize, len: usize },
    /// A range had its start after its end.
    InvalidRange { start: usize, end: usize },
    /// An element range had its lower bound ordered after its upper bound.
    InvalidElementRange,
    /// The container (or view) holds no element to hand out.
    NoSuchElement,
    /// The backing structure was modified behind the back of a view.
    ConcurrentModification { expected: u64, found: u64 },
    /// A view was handed a list other than the one it was created from.
    ForeignList,
    /// The operation would let the caller choose an element's position.
    Unsupported(&'static str),
    /// The operation is not valid in the current cursor state.
    IllegalState(&'static str),
    /// A bounded queue is full and the element does not outrank its head.
    QueueFull { capacity: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for length {len}")
            }
            Error::InvalidRange { start, end } => {
                write!(f, "range start {start} is greater than range end {end}")
            }
            Error::InvalidElementRange => {
                f.write_str("range start element is ordered after range end element")
            }
            Error::NoSuchElement => f.write_str("no such element"),
            Error::ConcurrentModification { expected, found } => write!(
                f,
                "concurrent modification: expected modification count {expected}, found {found}"
            ),
            Error::ForeignList => f.write_str("view used with a list it was not created from"),
            Error::Unsupported(op) => {
                write!(f, "unsupported operation `{op}`: position is determined by ordering")
            }
            Error::IllegalState(reason) => write!(f, "illegal state: {reason}"),
            Error::QueueFull { capacity } => write!(f, "queue full (capacity {capacity})"),
        }
    }
}

impl core::error::Error for Error {}

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Checks `index` against `[0, len)`.
pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(Error::IndexOutOfBounds { index, len })
    }
}
