//! 指し手生成: 駒種別の移動表とそれを使う生成器

mod generator;
mod tables;

pub use generator::{motions_from, Movement};
