//! Typed schema fragments for both sides of the conversion.
//!
//! [`nvd`] declares only the slice of the legacy NVD 1.1 feed this tool
//! consumes, validated at the loader boundary; [`osv`] declares the OSV
//! record shape that is written out, with field order matching assembly
//! order.

pub mod nvd;
pub mod osv;
