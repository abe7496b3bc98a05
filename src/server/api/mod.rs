//! API endpoints of the Covergrid server.

/// API endpoints for saving and listing grids.
pub mod grids;
/// API endpoint for proxying cover images.
pub mod proxy;
/// Central place to register App routes.
pub mod routes;
/// Centralized state management for the Actix web server.
pub mod state;
