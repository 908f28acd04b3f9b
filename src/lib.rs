//! Wavefield library - interactive noise-driven wave field

pub mod cli;
pub mod noise;
pub mod params;
pub mod recording;
pub mod rendering;
pub mod wave;
