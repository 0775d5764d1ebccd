/*!
# Camera 3D

Perspective / orthographic camera for real-time renderers.

The camera tracks a position and orientation in world space and derives
the view and projection matrices a renderer uses to bring geometry into
clip space.

## Architecture

- **Camera**: position, forward/up basis and projection parameters. View and
  projection matrices are rebuilt eagerly by every mutator; the combined
  view-projection is cached and refreshed lazily on read.
- **CameraConfig**: construction parameters and clip-space depth convention
- **Frustum** / **AABB**: visibility culling against the camera volume
- **CameraUniform**: `#[repr(C)]` snapshot for GPU upload
- **log**: pluggable logger used for diagnostics
*/

// Internal modules
mod error;
pub mod log;
pub mod camera;

// Main camera3d namespace module
pub mod camera3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Camera types
    pub use crate::camera::*;

    // Logging sub-module (types and logger slot, NOT macros)
    pub mod log {
        pub use crate::log::{
            Logger, LogEntry, LogSeverity, DefaultLogger,
            set_logger, reset_logger,
        };
    }
}

// Re-export math library at crate root
pub use glam;
