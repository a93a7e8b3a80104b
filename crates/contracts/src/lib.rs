pub mod domain;
pub mod projections;
pub mod shared;
pub mod usecases;
