//! Retained scene graph for labelnode
//!
//! A deliberately small scene graph of transforms and geodes holding
//! drawables. Subtrees are plain owned values, so a node exclusively owns its
//! children and there are no cycles.
//!
//! # Example
//!
//! ```rust
//! use labelnode_scene::{Geode, Geometry, Node, Transform};
//! use glam::{Vec2, Vec3};
//!
//! let mut geode = Geode::new("background");
//! geode.add_geometry(Geometry::quad(Vec2::ZERO, Vec2::new(4.0, 2.0), 0.0, [0.0, 0.0, 0.0, 1.0]));
//!
//! let root = Node::from(Transform::new("label", Vec3::new(1.0, 1.0, 0.0)).with_child(geode));
//! assert!(root.find("background").is_some());
//! ```

pub mod geometry;
pub mod node;
pub mod text;

pub use geometry::{ColorVertex, Geometry};
pub use node::{Drawable, Geode, Node, Transform};
pub use text::{GlyphQuad, GlyphVertex, TextDrawable};
