// ============================================================
// CSV INFRASTRUCTURE LAYER
// ============================================================
// Latin-1 tolerant reading and BOM-prefixed UTF-8 writing

mod csv_reader;
mod csv_writer;

pub use csv_reader::CsvReader;
pub use csv_writer::CsvWriter;
