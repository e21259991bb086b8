//! Contains common text reading and distance calculation functionality.

mod routing;
pub use self::routing::*;

mod text_reader;
pub(crate) use self::text_reader::*;
