pub mod claims;
pub mod error;
pub mod settings;

pub use error::{KgotlaError, KgotlaErrorExt, KgotlaErrorExt2, KgotlaErrorType, KgotlaResult};

/// The maximum number of items returned by any list endpoint.
pub const FETCH_LIMIT_MAX: i64 = 50;

/// The default number of items returned by list endpoints.
pub const FETCH_LIMIT_DEFAULT: i64 = 20;
