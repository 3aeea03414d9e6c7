pub mod client;
pub mod models;

pub use client::{BrregClient, FetchError, RegistrySource};
pub use models::{
    Address, Category, Contact, Organization, PageResult, Registry, StatusSource,
};
