//! URL routing module.
//!
//! This module provides the route table and reverse path generation.
//!
//! # Examples
//!
//! ```rust
//! use sprig::urls::{RouteDefinition, RouteTable};
//!
//! let table = RouteTable::new(vec![RouteDefinition::new("home", "/", "home")]).unwrap();
//! assert_eq!(table.path_for("home").unwrap(), "/");
//! ```

pub use sprig_urls::*;
