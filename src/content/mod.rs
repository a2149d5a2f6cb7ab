//! 题库（只读静态数据）
//!
//! 每天一个模块，题目按插入顺序排列，各版本从头截取。

pub mod day02;
pub mod day03;
pub mod day04;
pub mod day05;
pub mod day06;
pub mod day07;
pub mod day08;
pub mod day09;
pub mod day10;
