//! 图算法模块
//!
//! 包含最少跳数、最长路径、最短路径和环游搜索

mod bfs;
mod brute_force;
mod common;
mod dijkstra;
mod longest_path;
mod tour;

#[cfg(test)]
mod fixtures;

pub use bfs::HopSearch;
pub use brute_force::BruteForceTour;
pub use common::Route;
pub use dijkstra::{RelaxationOrder, ShortestPath};
pub use longest_path::LongestPathSearch;
pub use tour::{TourResult, TourSearch};
