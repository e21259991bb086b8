//! Contains functionality to read TSPLIB95 instances and write tours in TSPLIB95 `TOUR` format.

mod reader;
pub use self::reader::*;

mod writer;
pub use self::writer::*;
