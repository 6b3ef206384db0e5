//! UI components: the presentation, the graph demos, and the network background.

pub mod background;
pub mod bipartite;
pub mod force_graph;
pub mod graph_demo;
mod render;
pub mod scene;
pub mod slides;
pub mod theme;
