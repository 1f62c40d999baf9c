// Name resolution: reconciles the first-line name candidate with the upload's file name.
// Pure and CPU-bound; depends only on the lookup tables in `extraction::tables`.

pub mod filename;
pub mod resolver;
pub mod similarity;

pub use resolver::resolve;
