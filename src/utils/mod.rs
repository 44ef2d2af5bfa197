pub mod date;
pub mod excel_date;
pub mod formatting;
pub mod range;
pub mod table;
pub mod time;
