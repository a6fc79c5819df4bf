//! Text labels for scene graphs
//!
//! A [`LabelNode`] renders a text block with an optional background quad and
//! border frame, positioned and aligned around an anchor point. The label
//! owns its scene subtree and exposes it through [`LabelNode::scene_node`]
//! for attaching to a host scene graph.
//!
//! # Example
//!
//! ```rust
//! use labelnode_label::{Color, LabelConfig, LabelNode, Padding, TextAlign};
//!
//! let mut label = LabelNode::new(
//!     LabelConfig::new("Joint 3")
//!         .with_align(TextAlign::Center)
//!         .with_padding(Padding::uniform(2.0))
//!         .with_background(Color::new(0.0, 0.0, 0.0, 0.6)),
//! );
//!
//! label.set_text("Joint 4");
//! let rect = label.rectangle();
//! assert!(rect.width() > 4.0);
//! ```

pub mod config;
pub mod layout;
pub mod node;
pub mod types;

pub use config::{LabelConfig, DEFAULT_FONT_RESOLUTION, DEFAULT_FONT_SIZE};
pub use node::LabelNode;
pub use types::{Color, Padding, Rectangle, TextAlign};
