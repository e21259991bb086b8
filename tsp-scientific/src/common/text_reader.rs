use std::io::prelude::*;
use std::io::{BufReader, Read};
use std::str::FromStr;
use tsp_core::utils::GenericError;

/// Reads a next line into the buffer, returns zero when the end of input is reached.
pub(crate) fn read_line<R: Read>(reader: &mut BufReader<R>, buffer: &mut String) -> Result<usize, GenericError> {
    buffer.clear();
    reader.read_line(buffer).map_err(|err| err.to_string().into())
}

/// Parses a value trimming surrounding whitespaces.
pub(crate) fn parse_value<T>(data: &str, err_msg: &str) -> Result<T, GenericError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    data.trim().parse::<T>().map_err(|err| format!("{err_msg}: '{err}'").into())
}
