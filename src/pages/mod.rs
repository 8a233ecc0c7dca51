//! Dashboard route pages.
//!
//! Every page is a [`PageShell`] around exactly one [`TableComponent`]; the
//! routes themselves are declared once in [`routes::PAGE_ROUTES`].

pub mod roles;
pub mod routes;
pub mod shell;
pub mod table;

pub use roles::Role;
pub use routes::{find, PageRoute, PAGE_ROUTES};
pub use shell::PageShell;
pub use table::{TableComponent, TableKind};
