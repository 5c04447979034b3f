//! rosette is a layout engine for recursive, layered regular-polygon
//! patterns.
//!
//! An outer "structure" polygon is built per layer, its edges are
//! subdivided into evenly spaced points, and each point becomes the
//! center of a smaller polygon (or circle). The engine is pure
//! coordinate math: it emits [`Scene`] drawing directives (paths plus
//! optional fill/stroke colors) and leaves all actual rendering to an
//! external collaborator.
//!
//! ```
//! use rosette::{LayoutConfig, Rect, layout};
//!
//! let mut config = LayoutConfig::new(Rect::new(0.0, 0.0, 320.0, 240.0));
//! config.layer_count = 3;
//! config.drawing.draw_structure_edges = true;
//! config.validate().expect("valid configuration");
//!
//! let scene = layout(&config).expect("validated configuration cannot fault");
//! assert!(!scene.is_empty());
//! ```

pub mod errors;
pub mod layout;
pub mod log;
pub mod types;

pub use errors::{ConfigError, GeometryError, LayoutFault};
pub use layout::line::Line;
pub use layout::types::{
    ColorOptions, Directive, DrawingOptions, PathSpec, RegularPolygonSpec, Scene,
};
pub use layout::{LayoutConfig, layout};
pub use types::{Color, Point, Rect, Vector};
