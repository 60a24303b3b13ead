//! `dore_core` is the engine behind the [dore](https://github.com/AkatukiSora/dore)
//! reply template tool. A template is plain text in which every `{}` is a slot
//! to fill and every `{{}}` is a literal `{}` that is left alone.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Raw template
//!   → Literal protector (swaps each `{{}}` for a unique marker)
//!   → Placeholder extractor (labels each `{}` from the text before it on its line)
//!   → Caller prompts for one value per placeholder
//!   → Session::fill (positional substitution, markers rendered back as `{}`)
//! ```
//!
//! [`highlight_preview`] runs the same protection step and decorates each
//! fillable `{}` for display instead of filling it.
//!
//! ## Modules
//!
//! - [`config`]: Optional `dore.toml` loading and the [`ColorMode`] setting.
//! - [`document`]: The YAML [`Document`] holding a title, description and
//!   template body.
//!
//! ## Quick Start
//!
//! ```rust
//! use dore_core::Session;
//!
//! let session = Session::new("呼び方: {}\n好感度: {}");
//! assert_eq!(session.placeholders()[0].label, "呼び方:");
//!
//! let filled = session.fill(&["Alice", "100"]).unwrap();
//! assert_eq!(filled, "呼び方: Alice\n好感度: 100");
//! ```

pub use config::*;
pub use document::*;
pub use error::*;
pub use literal::*;
pub use placeholder::*;
pub use session::*;

pub mod config;
pub mod document;
#[allow(unused_assignments)]
mod error;
mod literal;
mod placeholder;
mod session;
