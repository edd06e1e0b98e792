// Library root
// -----------
// This crate exposes the pieces of the movie picker CLI. The binary
// (`main.rs`) wires them together and hands control to the menu loop.
//
// Module responsibilities:
// - `catalog`: the genre and mood tables behind the sub-menus.
// - `config`: the TMDB credential, base URL and query heuristics.
// - `query`: builds discovery and search requests from a filter.
// - `api`: the blocking TMDB client and the `MovieSource` seam.
// - `select`: picks the movie to show from a candidate list.
// - `movie`: the result record and its terminal layout.
// - `ui`: the interactive menu state machine.
pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod movie;
pub mod query;
pub mod select;
pub mod ui;
