//! Graph demo slides: the simulated unipartite graph and the bipartite projection demo.

mod component;
mod session;

pub use component::{BipartiteDemo, SharedSession, UnipartiteDemo};
pub use session::{Command, DemoSession};
