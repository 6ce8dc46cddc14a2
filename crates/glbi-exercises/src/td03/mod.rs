//! TD03: hierarchical transforms with push/pop.

pub mod ex01;
