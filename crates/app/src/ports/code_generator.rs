//! Code generator port — allocation of record codes.

use std::future::Future;

use muebles_domain::error::MueblesError;
use muebles_domain::id::Code;

/// Hands out codes for new records.
///
/// Implementations must return a code that no existing record uses, even when
/// several callers ask at the same time.
pub trait CodeGenerator {
    /// Allocate the next code.
    fn next_code(&self) -> impl Future<Output = Result<Code, MueblesError>> + Send;
}
