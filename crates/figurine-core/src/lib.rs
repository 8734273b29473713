pub mod builder;
pub mod constants;
pub mod geometry;
pub mod interaction;
pub mod manager;
pub mod options;
pub mod order;
pub mod preview;
pub mod prompt;
pub mod scene;
pub static FIGURINE_WGSL: &str = include_str!("../shaders/figurine.wgsl");

pub use builder::{apply_options, body_color, build_accessory, pose_params, PoseParams};
pub use geometry::{MeshVertex, Shape};
pub use interaction::{CanvasEvent, DragPhase, EventResponse, InteractionController};
pub use manager::{FrameRequestId, FrameScheduler, RenderSurface, SceneFrame, SceneManager};
pub use options::*;
pub use preview::{Preview, PreviewError, PreviewStatus, ViewMode};
pub use scene::*;
