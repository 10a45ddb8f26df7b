mod envelope;
mod error;
mod query;

pub use envelope::{FetchPlan, ReservesEnvelope};
pub use error::EnvelopeError;
pub use query::ReservesQuery;
