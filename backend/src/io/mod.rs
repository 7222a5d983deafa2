//! # IO Module
//!
//! Adapter layer between HTTP clients and the domain services.
//!
//! Requests are decoded into [`FormValues`](crate::domain::validation::FormValues),
//! validated, turned into domain commands and handed to the services. Results
//! come back through the mappers as DTOs of the `shared` crate and are written
//! out by the response builder.

pub mod rest;
