pub mod config;
pub mod controller;
pub mod edge;
pub mod error;
pub mod geometry;
pub mod host;
pub mod log;
pub mod rect;
pub mod sampler;
pub mod state;
pub mod theme;

pub use controller::DockController;
pub use edge::Edge;
pub use error::{DockError, WindowResult};
pub use geometry::EdgeGeometry;
pub use host::{Overlay, PanelHost, PointerSource, Sampler};
pub use rect::{Point, Rect, Size};
pub use sampler::{PointerSampler, Sample, SampleSink};
pub use state::{DockPhase, DockState};
pub use theme::{Color, Theme};
