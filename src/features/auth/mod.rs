//! Session-based authentication for the admin surface.
//!
//! Login exchanges a username/password form for a database-backed session
//! row and an HttpOnly cookie; the admin middleware resolves that cookie on
//! every request. Any authenticated admin has full rights to every entity.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/admin/login` | No | Login form |
//! | POST | `/admin/login` | No | Authenticate, set session cookie |
//! | POST | `/admin/logout` | Cookie | Revoke session, clear cookie |

pub mod dtos;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod services;

pub use services::{AuthService, SessionService};
