//! # Rigcheck Kernel
//!
//! Compatibility rule evaluation for PC part builds: given a snapshot of
//! parts and a catalog of rules, decide whether the parts form a valid
//! configuration and explain why not.
//!
//! The kernel is pure. It does not fetch, persist, or log; every call is an
//! independent function of its inputs and may run on any thread.
//!
//! ## Architecture
//!
//! ```text
//! RuleEngine            ← pair traversal, power budget, aggregation
//!     │
//! RuleMatcher           ← active rules indexed by unordered category pair
//!     │
//! comparator::*         ← one pure function per rule type
//! required::*           ← mandatory categories, once per build
//!     │
//! Finding               ← issue | warning | indeterminate, deterministic id
//!     │
//! CompatibilityReport   ← is_compatible, issues, warnings
//! ```

pub mod comparator;
pub mod config;
pub mod engine;
pub mod error;
pub mod finding;
pub mod matcher;
pub mod part;
pub mod report;
pub mod required;
pub mod rule;
pub mod schema;
pub mod spec_value;

pub use config::EngineConfig;
pub use engine::{RuleEngine, evaluate};
pub use error::{ConfigError, ValidationError};
pub use finding::{Finding, Severity};
pub use matcher::RuleMatcher;
pub use part::{Part, PartId, PartType};
pub use report::{CompatibilityReport, aggregate};
pub use required::validate_required_types;
pub use rule::{CompatibilityRule, RuleId, RuleKind};
pub use schema::validate_specifications;
pub use spec_value::{SpecValue, Specifications};
