//! Web layer: routing, request dispatch and page rendering.

pub mod dispatch;
pub mod handlers;
pub mod page;
pub mod router;
