//! TD02: point sets, convex shapes and model transforms.

pub mod ex01;
pub mod ex0111;
pub mod ex02;
pub mod ex03;
pub mod ex04;
pub mod ex05;
