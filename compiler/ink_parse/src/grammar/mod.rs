//! Grammar productions.
//!
//! - `expr`: full expressions, binary operator chains, match suffixes
//! - `atom`: operands, literals, groups, calls and function literals

mod atom;
mod expr;
