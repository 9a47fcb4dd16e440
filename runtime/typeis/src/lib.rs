//! typeis - runtime type predicates and deep equality.
//!
//! A flat namespace of named checks over dynamic [`Value`]s:
//!
//! - [`classify`] and [`primitive_kind`], the canonical categorisation
//! - [`equal`], deep structural equality (see `typeis_eq` for the rules)
//! - the predicate battery (`array`, `positive_int`, `within`, ...)
//! - [`aliases`], the alternate spellings of every predicate
//! - [`check`], dispatch by predicate name with argument-count checking
//!
//! ```text
//! use typeis::{check, Value};
//!
//! assert!(typeis::non_empty_array(&Value::array(vec![Value::from(1)])));
//! assert_eq!(check("posInt", &[Value::from(3)]), Ok(true));
//! ```

pub mod aliases;
mod check;
mod error;
mod names;
mod predicates;

pub use check::check;
pub use error::CheckError;
pub use names::PredicateName;
pub use predicates::*;

pub use typeis_eq::{EqPolicy, Equality, NestedArrays, ObjectWalk};
pub use typeis_value::{
    classify, coerce, primitive_kind, DateValue, ErrorValue, FunctionValue, Heap, HostValue,
    ObjectValue, PrimitiveKind, RegExpValue, SymbolValue, TypeTag, Value,
};

/// Crate version, as published.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize the tracing subscriber for debugging.
///
/// Call this once at program start. Respects `RUST_LOG`:
/// - `RUST_LOG=typeis=debug` - alias resolution in [`check`]
/// - `RUST_LOG=typeis_eq=trace` - every rejection inside [`equal`]
///
/// Does nothing when `RUST_LOG` is unset, and nothing on repeated calls.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}
