//! Customer module: repository abstraction, its backends and the service on top.

pub mod repository;
pub mod repo;
pub mod service;

pub use repository::CustomerRepository;
pub use service::CustomerService;
