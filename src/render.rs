//! Laying out an [ExpressionNode] tree as a diagram, and drawing it onto a surface.
//!
//! Layout is done on a grid: each level of the tree is one row lower than its parent, and every
//! node takes the next column from left to right, in-order. The layout is independent of the
//! surface; anything implementing [Renderer] can draw it.

use alloc::{string::String, vec::Vec};
use core::cmp::max;
use core::f32::consts::TAU;
use log::warn;

use crate::node::ExpressionNode;

pub type Dimension = u64;

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub fn new(x: i64, y: i64) -> Point {
        Point { x, y }
    }

    pub fn dx(&self, delta: i64) -> Point {
        Point { x: self.x + delta, y: self.y }
    }

    pub fn dy(&self, delta: i64) -> Point {
        Point { x: self.x, y: self.y + delta }
    }
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Area {
    pub width: Dimension,
    pub height: Dimension,
}

impl Area {
    pub fn new(width: Dimension, height: Dimension) -> Area {
        Area { width, height }
    }

    /// Returns true if `other` fits inside this area.
    pub fn contains(&self, other: Area) -> bool {
        other.width <= self.width && other.height <= self.height
    }
}

/// Spacing used when laying out a tree. The defaults are in pixels; use [RenderSettings::ascii]
/// for surfaces measured in characters.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct RenderSettings {
    /// Distance between rows, and between columns.
    pub margin: i64,

    /// How far each end of an edge is pulled in from the centres of the nodes it joins, so that
    /// edges don't run into node labels.
    pub line_offset: i64,

    pub node_radius: i64,

    /// How far above the root node the equation label is drawn.
    pub label_offset: i64,
}

impl Default for RenderSettings {
    fn default() -> Self {
        RenderSettings {
            margin: 65,
            line_offset: 14,
            node_radius: 20,
            label_offset: 25,
        }
    }
}

impl RenderSettings {
    pub fn ascii() -> Self {
        RenderSettings {
            margin: 4,
            line_offset: 1,
            node_radius: 1,
            label_offset: 2,
        }
    }
}

#[derive(PartialEq, Eq, Clone, Debug)]
pub struct NodeLayout {
    pub text: String,
    pub centre: Point,
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Edge {
    pub from: Point,
    pub to: Point,
}

/// The positions of everything in a tree diagram.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct TreeLayout {
    /// Nodes in-order, left to right.
    pub nodes: Vec<NodeLayout>,
    pub edges: Vec<Edge>,
    pub label: String,
    pub label_centre: Point,
    pub root: Point,
}

impl TreeLayout {
    /// The area from the origin needed to fit every node and edge. Text is not measured, since
    /// its size depends on the surface.
    pub fn area(&self, settings: &RenderSettings) -> Area {
        let mut width = 0;
        let mut height = 0;

        let node_extents = self.nodes
            .iter()
            .map(|n| n.centre.dx(settings.node_radius).dy(settings.node_radius));
        let edge_extents = self.edges
            .iter()
            .flat_map(|e| [e.from, e.to]);

        for point in node_extents.chain(edge_extents) {
            width = max(width, point.x);
            height = max(height, point.y);
        }

        Area::new(width as Dimension, height as Dimension)
    }
}

/// Computes the layout of a tree, with `label` (usually the normalized equation) centred above
/// the root.
pub fn layout(tree: &ExpressionNode, label: &str, settings: &RenderSettings) -> TreeLayout {
    let mut nodes = Vec::new();
    let mut edges = Vec::new();
    let (root, _) = layout_node(tree, 1, settings.margin, settings, &mut nodes, &mut edges);

    TreeLayout {
        nodes,
        edges,
        label: label.into(),
        label_centre: root.dy(-settings.label_offset),
        root,
    }
}

/// Lays out `node` with its leftmost descendant in the column at `margin_left`. Returns the centre
/// of `node` and the next free column.
fn layout_node(
    node: &ExpressionNode,
    depth: i64,
    margin_left: i64,
    settings: &RenderSettings,
    nodes: &mut Vec<NodeLayout>,
    edges: &mut Vec<Edge>,
) -> (Point, i64) {
    let row = depth * settings.margin;
    let offset = settings.line_offset;

    match node {
        ExpressionNode::Leaf(_) => {
            let centre = Point::new(margin_left, row);
            nodes.push(NodeLayout { text: node.label(), centre });
            (centre, margin_left + settings.margin)
        }

        ExpressionNode::Operator { left, right, .. } => {
            let (left_centre, margin_left) = layout_node(left, depth + 1, margin_left, settings, nodes, edges);

            let centre = Point::new(margin_left, row);
            nodes.push(NodeLayout { text: node.label(), centre });

            let (right_centre, margin_left) = layout_node(right, depth + 1, margin_left + settings.margin, settings, nodes, edges);

            edges.push(Edge {
                from: left_centre.dx(offset).dy(-offset),
                to: centre.dx(-offset).dy(offset),
            });
            edges.push(Edge {
                from: centre.dx(offset).dy(offset),
                to: right_centre.dx(-offset).dy(-offset),
            });

            (centre, margin_left)
        }
    }
}

pub trait Renderer {
    /// The size of the drawing surface.
    fn canvas_size(&mut self) -> Area;

    /// Draw part of the outline of a circle. Angles are in radians, clockwise from the positive x
    /// axis.
    fn draw_arc(&mut self, centre: Point, radius: i64, start_angle: f32, end_angle: f32);

    fn draw_line(&mut self, from: Point, to: Point);

    /// Draw text horizontally and vertically centred on a point.
    fn draw_text(&mut self, text: &str, centre: Point);

    /// Draws a precomputed layout: edges first, then each node as a circle with its text, then
    /// the label.
    fn draw_layout(&mut self, layout: &TreeLayout, settings: &RenderSettings) {
        for edge in &layout.edges {
            self.draw_line(edge.from, edge.to);
        }

        for node in &layout.nodes {
            self.draw_arc(node.centre, settings.node_radius, 0.0, TAU);
            self.draw_text(&node.text, node.centre);
        }

        self.draw_text(&layout.label, layout.label_centre);
    }

    /// Lays out and draws a tree with `label` above it, returning the centre of the root node.
    fn draw_tree(&mut self, tree: &ExpressionNode, label: &str, settings: &RenderSettings) -> Point {
        let layout = layout(tree, label, settings);

        let needed = layout.area(settings);
        let canvas = self.canvas_size();
        if !canvas.contains(needed) {
            warn!("tree for {:?} needs {:?} but the canvas is {:?}, it will be clipped", label, needed, canvas);
        }

        self.draw_layout(&layout, settings);
        layout.root
    }
}
