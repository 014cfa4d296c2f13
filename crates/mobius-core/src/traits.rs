use crate::error::Result;

/// Check that a value satisfies its preconditions before it is used.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}
