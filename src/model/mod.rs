//! # Value Model
//!
//! Plain data that crosses the engine boundary: runtime values, the
//! `Period` date range, variables and native type descriptors.
//!
//! Design rule: NO literal AST types, NO schema types here.
//! This module is pure data with no I/O or async.

pub mod value;
pub mod period;
pub mod variables;
pub mod descriptor;

pub use value::Value;
pub use period::{Period, ParsePeriodError};
pub use variables::Variables;
pub use descriptor::TypeDescriptor;
