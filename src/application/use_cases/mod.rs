pub mod csv_cleaner;
