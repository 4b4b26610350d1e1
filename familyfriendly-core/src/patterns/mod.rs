//! Substitution-tolerant pattern compilation.
//!
//! Every working-dictionary entry is turned into a case-insensitive regular
//! expression, anchored at word boundaries, in which letters that are commonly
//! swapped for look-alike digits or symbols ("leet speak") accept those
//! substitutes as well.

pub mod compiler;
pub mod literal;
