//! A small N-body gravity sandbox: a handful of point masses under mutual
//! Newtonian gravity, integrated with explicit Euler steps and drawn with
//! their orbit trails.

pub mod body;
pub mod collision;
pub mod config;
pub mod error;
pub mod render;
pub mod scenario;
pub mod simulation;
pub mod surface;
pub mod trail;
pub mod ui;

pub use body::Body;
pub use config::{SimConfig, UpdateOrder, AU, DAY, G};
pub use error::{SimError, SimResult};
pub use render::{Renderer, Viewport};
pub use simulation::Simulation;
pub use trail::Trail;
