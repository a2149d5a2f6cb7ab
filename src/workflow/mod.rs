pub mod day_generator;
pub mod days;
pub mod sections;
pub mod worksheet;

pub use day_generator::{generate_worksheet, output_file_name, DayGenerator};
pub use days::{all_generators, generator_for};
pub use worksheet::{GeneratedWorksheet, SectionWriter, Worksheet};
