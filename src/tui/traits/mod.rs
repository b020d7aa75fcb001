//! Component trait system for the converter screen
//!
//! Each piece of the screen declares its own capabilities through traits
//! instead of the host knowing how every widget draws or reacts to keys.
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │                 ConverterView                 │
//! │  (owns selection/amount/focus, talks to the   │
//! │   presenter, routes keys to the focused part) │
//! └───────────────────────────────────────────────┘
//!             │            │             │
//!             ▼            ▼             ▼
//!      ┌──────────┐ ┌────────────┐ ┌───────────┐
//!      │  Picker  │ │ AmountField│ │  Convert  │   + ErrorAlert overlay
//!      └──────────┘ └────────────┘ └───────────┘
//! ```
//!
//! Child components are short-lived: they borrow the values they display and
//! report edits back as events, so the view stays the single owner of its
//! transient state.
//!
//! - [`Component`] - render + identity
//! - [`Interactive`] - keyboard handling with a component-specific result

mod component;
mod interactive;

pub use component::{Component, ComponentId, RenderContext};
pub use interactive::{Handled, Interactive};
