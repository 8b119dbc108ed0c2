// Candidate listing: file loader, query parsing, filter/sort/paginate pipeline.
// Each request loads the data file fresh and runs the pipeline once.

pub mod handlers;
pub mod loader;
pub mod pipeline;
pub mod query;
