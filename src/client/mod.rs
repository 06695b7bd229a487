//! Client module - activity board HTTP transports
//!
//! `NoWasmClient` (reqwest) backs the terminal front end and `WasmClient`
//! (gloo_net) the browser one. Both implement [`crate::interface::ActivityApi`].

#[cfg(feature = "no-wasm")]
pub mod request;
#[cfg(feature = "no-wasm")]
pub use request::NoWasmClient;

#[cfg(feature = "wasm")]
pub mod gloo;
#[cfg(feature = "wasm")]
pub use gloo::WasmClient;
