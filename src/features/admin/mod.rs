//! Server-rendered admin surface.
//!
//! Every entity gets a scaffolded CRUD screen: an [`scaffold::AdminResource`]
//! implementation binds the entity's feature service to the shared list/form
//! templates, declaring its columns, form fields and upload handling. The
//! registry drives both routing and the navigation menu. The dashboard index
//! is reachable only by direct link; it never appears in the menu.
//!
//! All routes below `/admin` (except login/logout) sit behind the session
//! middleware in `core::middleware`.

pub mod forms;
pub mod handlers;
pub mod resources;
pub mod routes;
pub mod scaffold;

pub use scaffold::AdminRegistry;
