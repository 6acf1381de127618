//! Domain error types.

mod retrieval_error;

pub use retrieval_error::RetrievalError;
