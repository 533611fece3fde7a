//! # Bindsheet - key-binding cheat sheets for the terminal
//!
//! Bindsheet reads the JSON dump of a window manager's key and mouse
//! bindings (as printed by `hyprctl -j binds`) and renders a colored,
//! multi-column cheat sheet:
//!
//! ```text
//! Key-bindings:            ❖ ⇧ q   Kills window
//! ❖ a     Open terminal    ❖ ◀     Move focus left
//! ❖ q     Closes window    ❖ ▶     Move focus right
//! ```
//!
//! ## Pipeline
//!
//! 1. [`record`]: decode every binding object from the input
//! 2. [`directive`]: honor `!skip`, `!br` and `!h` markers in descriptions
//! 3. [`modmask`] and [`format`]: turn masks, keys and dispatchers into glyphs and text
//! 4. [`sheet`]: buffer each block and lay it out with [`bindsheet_render::ColumnLayout`]
//!
//! ## Example
//!
//! ```rust
//! use bindsheet::{CheatSheet, ColorChoice, Config};
//!
//! let input = r#"[{"key":"a","modmask":64,"dispatcher":"exec","arg":"kitty","description":"Open terminal"}]"#;
//! let sheet = CheatSheet::new(Config::default().color(ColorChoice::Never));
//! let out = sheet.render(input.as_bytes()).unwrap();
//! assert!(out.contains("❖ a     Open terminal"));
//! ```

pub mod config;
pub mod directive;
pub mod error;
pub mod format;
pub mod heading;
pub mod logging;
pub mod modmask;
pub mod record;
pub mod sheet;
pub mod tables;

pub use config::{Cli, ColorChoice, Config};
pub use directive::{Heading, RowDirective};
pub use error::SheetError;
pub use format::{format_binding, format_description, BindingStyle};
pub use record::{read_records, BindingRecord};
pub use sheet::CheatSheet;
