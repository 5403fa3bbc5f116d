//! Backoffice entity forms.
//!
//! Typed records, validation schemas, image encoding, and the generic
//! [`EntityForm`](form::EntityForm) controller shared by the Activity,
//! Category, and User admin forms. Transport lives behind the
//! [`EntityApi`](api::EntityApi) trait; feedback behind
//! [`Notifier`](notify::Notifier).

pub mod api;
pub mod error;
pub mod form;
pub mod image;
pub mod models;
pub mod notify;
pub mod schema;
pub mod types;
