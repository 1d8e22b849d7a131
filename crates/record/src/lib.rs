//! Daily weather observation records for a single location.

mod error;
mod raw;
mod season;

pub use error::RecordError;
pub use raw::RawRecord;
pub use season::Season;
