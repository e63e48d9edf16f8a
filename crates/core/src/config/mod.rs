//! Configuration: the YAML-driven phoneme tables, phonotactic rules, and
//! postprocessing rules that parameterize the rest of the pipeline.

pub mod model;
pub mod rules;
pub mod schema;

pub use model::{Config, Mapping, PostprocessingConfig};
pub use rules::{ConsonantConstraint, FoldRule, FoldTarget, PairRule, Phonology, VowelDropRule, VowelDropScope};
