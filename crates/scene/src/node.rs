//! Scene graph nodes

use crate::geometry::Geometry;
use crate::text::TextDrawable;
use glam::{Mat4, Quat, Vec3};

/// Anything a geode can draw
#[derive(Debug, Clone, PartialEq)]
pub enum Drawable {
    Geometry(Geometry),
    Text(TextDrawable),
}

/// Leaf node holding drawables
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Geode {
    pub name: String,
    pub drawables: Vec<Drawable>,
}

impl Geode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            drawables: Vec::new(),
        }
    }

    pub fn add_geometry(&mut self, geometry: Geometry) {
        self.drawables.push(Drawable::Geometry(geometry));
    }

    /// Replace all drawables with `drawable`, or clear the geode on `None`
    pub fn replace(&mut self, drawable: Option<Drawable>) {
        self.drawables.clear();
        self.drawables.extend(drawable);
    }

    /// First geometry drawable, if any
    pub fn geometry(&self) -> Option<&Geometry> {
        self.drawables.iter().find_map(|d| match d {
            Drawable::Geometry(g) => Some(g),
            Drawable::Text(_) => None,
        })
    }

    pub fn geometry_mut(&mut self) -> Option<&mut Geometry> {
        self.drawables.iter_mut().find_map(|d| match d {
            Drawable::Geometry(g) => Some(g),
            Drawable::Text(_) => None,
        })
    }

    /// First text drawable, if any
    pub fn text(&self) -> Option<&TextDrawable> {
        self.drawables.iter().find_map(|d| match d {
            Drawable::Text(t) => Some(t),
            Drawable::Geometry(_) => None,
        })
    }

    pub fn text_mut(&mut self) -> Option<&mut TextDrawable> {
        self.drawables.iter_mut().find_map(|d| match d {
            Drawable::Text(t) => Some(t),
            Drawable::Geometry(_) => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.drawables.is_empty()
    }
}

/// Node that applies translation, rotation and scale to its children
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    pub name: String,
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
    pub children: Vec<Node>,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            name: String::new(),
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
            children: Vec::new(),
        }
    }
}

impl Transform {
    pub fn new(name: impl Into<String>, translation: Vec3) -> Self {
        Self {
            name: name.into(),
            translation,
            ..Default::default()
        }
    }

    /// Builder: Set scale
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Builder: Append a child
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Local matrix (scale, then rotation, then translation)
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }
}

/// A scene graph node
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Transform(Transform),
    Geode(Geode),
}

impl From<Transform> for Node {
    fn from(transform: Transform) -> Self {
        Node::Transform(transform)
    }
}

impl From<Geode> for Node {
    fn from(geode: Geode) -> Self {
        Node::Geode(geode)
    }
}

impl Node {
    pub fn name(&self) -> &str {
        match self {
            Node::Transform(t) => &t.name,
            Node::Geode(g) => &g.name,
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Transform(t) => &t.children,
            Node::Geode(_) => &[],
        }
    }

    pub fn children_mut(&mut self) -> &mut [Node] {
        match self {
            Node::Transform(t) => &mut t.children,
            Node::Geode(_) => &mut [],
        }
    }

    pub fn as_transform(&self) -> Option<&Transform> {
        match self {
            Node::Transform(t) => Some(t),
            Node::Geode(_) => None,
        }
    }

    pub fn as_transform_mut(&mut self) -> Option<&mut Transform> {
        match self {
            Node::Transform(t) => Some(t),
            Node::Geode(_) => None,
        }
    }

    pub fn as_geode(&self) -> Option<&Geode> {
        match self {
            Node::Geode(g) => Some(g),
            Node::Transform(_) => None,
        }
    }

    pub fn as_geode_mut(&mut self) -> Option<&mut Geode> {
        match self {
            Node::Geode(g) => Some(g),
            Node::Transform(_) => None,
        }
    }

    /// Depth-first search by name, including `self`
    pub fn find(&self, name: &str) -> Option<&Node> {
        if self.name() == name {
            return Some(self);
        }
        self.children().iter().find_map(|c| c.find(name))
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Node> {
        if self.name() == name {
            return Some(self);
        }
        self.children_mut().iter_mut().find_map(|c| c.find_mut(name))
    }

    /// Visit every node depth-first with its accumulated world matrix
    pub fn traverse<F>(&self, parent: Mat4, visit: &mut F)
    where
        F: FnMut(&Node, Mat4),
    {
        let world = match self {
            Node::Transform(t) => parent * t.matrix(),
            Node::Geode(_) => parent,
        };
        visit(self, world);
        for child in self.children() {
            child.traverse(world, visit);
        }
    }

    /// Number of drawables in this subtree
    pub fn drawable_count(&self) -> usize {
        let mut count = 0;
        self.traverse(Mat4::IDENTITY, &mut |node, _| {
            if let Node::Geode(g) = node {
                count += g.drawables.len();
            }
        });
        count
    }
}
