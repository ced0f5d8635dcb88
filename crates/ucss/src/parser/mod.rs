//! Value parsing for declared styles.
//!
//! Every supported value mini-language lives here:
//!
//! - [`units`]: numbers, lengths, angles
//! - [`value`]: per-property classification and dispatch
//! - [`varref`]: `var()` reference scanning
//! - [`transform`]: transform function lists
//! - [`shadow`]: box/text shadow lists

pub mod shadow;
pub mod transform;
pub mod units;
pub mod value;
pub mod varref;

pub use shadow::parse_shadows;
pub use transform::parse_transforms;
pub use units::{parse_angle, parse_length, parse_number};
pub use value::{PropKind, css_name, parse_value, prop_kind};
pub use varref::{VarRef, contains_var, find_var};
