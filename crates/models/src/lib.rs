//! Persistence models: SeaORM entities, request shapes and connection setup.

pub mod errors;
pub mod db;
pub mod customer;

#[cfg(test)]
mod tests;
