//! Output table writing
//!
//! [`CsvTableWriter`] streams rows into a CSV file with a fixed header. Rows
//! arrive as JSON objects; each is projected onto the header columns in
//! order, with missing fields written as empty strings.

mod writer;

#[cfg(test)]
mod tests;

pub use writer::CsvTableWriter;
