use thiserror::Error;

/// Faults the interpreter reports to the host.
///
/// Stack faults indicate a malformed or unsupported program and end the run;
/// unknown opcodes are deliberately not errors (they are logged and skipped).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("program is {size} bytes but only 3584 bytes fit above 0x200")]
    ProgramTooLarge { size: usize },

    #[error("call stack overflow: more than 16 nested subroutine calls")]
    StackOverflow,

    #[error("call stack underflow: return with no matching call")]
    StackUnderflow,
}
