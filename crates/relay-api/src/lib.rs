//! # relay-api
//!
//! HTTP API layer for sub-relay.
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | POST | `/verify-subscription` | `{customer_id}` → `{active}` |
//! | POST | `/create-checkout-session` | `{email}` → `{checkout_url}` |
//! | GET | `/map-token` | `{token}` |
//!
//! Failures answer 400 with `{error}`.
//!
//! ## Startup
//!
//! The server refuses to start unless `STRIPE_SECRET_KEY` (an `sk_` or
//! `rk_` key) and `STRIPE_PRICE_ID` are set. A missing price or malformed
//! key is reported once at boot rather than as a provider error on every
//! request. `MAPBOX_TOKEN` is optional; without it `/map-token` answers
//! `{"token": null}`.

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
