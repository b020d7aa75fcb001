// generic-converter - a presenter-driven converter screen for the terminal
//
// The screen (picker, amount entry, convert button, result line) computes
// nothing itself. A caller-supplied presenter implementing
// `presenter::DataProvider` owns the data and the conversion; the view
// observes its snapshots and forwards user intent back.
//
// Layout:
// - presenter: the DataProvider contract, snapshots and the StateStore helper
// - error: what a presenter can put in its error slot
// - tui: ratatui host, converter view and its components
// - demo: offline currency presenter used by the binary
// - config, logging, theme: ambient host concerns

pub mod config;
pub mod demo;
pub mod error;
pub mod logging;
pub mod presenter;
pub mod theme;
pub mod tui;
