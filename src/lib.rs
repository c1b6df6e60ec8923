//! WaveSim library - floating platform riding a traveling wave

pub mod clock;
pub mod error;
pub mod mesh;
pub mod params;
pub mod platform;
pub mod rendering;
pub mod shader;
pub mod simulation;
pub mod wave;
