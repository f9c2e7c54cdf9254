//! Graph visualization
//!
//! Turns a loaded [`KnowledgeGraph`](crate::graph::KnowledgeGraph) into a
//! [`RenderScene`] and then into a standalone HTML artifact:
//! - `style`: colors by entity type, sizes by degree
//! - `layout`: physics parameters for the force-directed layout
//! - `annotate`: tooltip text
//! - `scene`: assembly of the above
//! - `html`: serialization with an inlined renderer

pub mod annotate;
pub mod html;
pub mod layout;
pub mod scene;
pub mod style;

pub use annotate::{edge_tooltip, node_tooltip, Annotations};
pub use html::{embed_fragment, render_html};
pub use layout::{build_simulation_config, SimulationConfig};
pub use scene::{assemble_scene, edge_width, DisplayOptions, RenderScene, SceneEdge, SceneNode};
pub use style::{assign_colors, assign_sizes, StyleAssignment, PALETTE};
