pub mod raw_table;
pub mod record;
