// grubdash/src/services/mod.rs

pub mod id_generator;
pub mod seed;
