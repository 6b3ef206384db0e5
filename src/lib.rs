//! graph-slides: a slide presentation about networks, with live graph demos.
//!
//! This crate renders a client-side slide deck over an animated particle network, plus two
//! interactive demos: a force-directed unipartite graph and a two-column bipartite graph with
//! one-mode projection.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, error, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
pub mod config;
pub mod graph;

pub use components::graph_demo::{Command, DemoSession, SharedSession};
pub use config::{DemoConfig, PageData, SimulationConfig};
pub use graph::{Graph, GraphData, GraphEdge, GraphError, GraphNode, Partition, ProjectedEdge, project};

use components::background::NetworkBackground;
use components::slides::Presentation;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("graph-slides: logging initialized");
}

/// Load page data from a script element with id="graph-data".
/// Expected format: JSON with optional `unipartite`, `bipartite`, and `config` keys.
fn load_page_data() -> Option<PageData> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("graph-data")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match PageData::from_json(&json_text) {
		Ok(data) => {
			info!("graph-slides: loaded page data");
			Some(data)
		}
		Err(e) => {
			warn!("graph-slides: failed to parse page data: {}", e);
			None
		}
	}
}

fn start_session() -> Option<SharedSession> {
	match DemoSession::from_page(load_page_data().unwrap_or_default()) {
		Ok(session) => Some(Rc::new(RefCell::new(session))),
		Err(e) => {
			error!("graph-slides: demo graphs unavailable: {}", e);
			None
		}
	}
}

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let session = start_session();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="light" />
		<Title text="Networks and Projections" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<NetworkBackground />
		<Presentation session=session />
	}
}
