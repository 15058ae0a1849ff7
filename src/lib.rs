// Library root
// -----------
// This crate exposes a small library surface for the `reducer-post` binary.
// The binary (`main.rs`) reads the environment and arguments, then hands
// everything to these modules.
//
// Module responsibilities:
// - `config`: resolves the `host:port` of the reducer service.
// - `route`: maps a file suffix (`.js`, `.css`, `.less`) to a server path.
// - `form`: builds the `application/x-www-form-urlencoded` request body.
// - `api`: the blocking HTTP client that posts one body and reads the reply.
// - `ui`: the per-file run loop and everything printed to stdout.
pub mod api;
pub mod config;
pub mod form;
pub mod route;
pub mod ui;
