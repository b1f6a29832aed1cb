pub mod config;
pub mod error;
pub mod gate;
pub mod headless;
pub mod host;
pub mod indicator;
pub mod manager;
pub mod registry;
pub mod sampler;
pub mod seek;

pub use config::{Axis, EasingType, SeekConfig, TabsConfig};
pub use error::{Error, Result};
pub use gate::GateState;
pub use host::{FrameScheduler, ScrollSurface};
pub use indicator::{IndicatorStyle, IndicatorUpdate};
pub use manager::FluidTabs;
pub use registry::{TabGeometry, TabSpan};
pub use seek::{SeekOutcome, SeekStatus, SeekTicket};
