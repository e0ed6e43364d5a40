// Domain layer: records and the sample data set. No dependencies beyond serde.

pub mod model;
pub mod sample;
