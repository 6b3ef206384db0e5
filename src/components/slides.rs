//! Slide deck navigation and the presentation view.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{KeyboardEvent, MouseEvent};

use super::graph_demo::{BipartiteDemo, SharedSession, UnipartiteDemo};

/// Anchor id and menu title of a slide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlideInfo {
	pub id: &'static str,
	pub title: &'static str,
}

/// Slides of the presentation, in order.
pub const SLIDES: &[SlideInfo] = &[
	SlideInfo {
		id: "intro",
		title: "Networks",
	},
	SlideInfo {
		id: "unipartite",
		title: "Unipartite graphs",
	},
	SlideInfo {
		id: "bipartite",
		title: "Bipartite graphs",
	},
	SlideInfo {
		id: "projection",
		title: "One-mode projection",
	},
	SlideInfo {
		id: "summary",
		title: "Summary",
	},
];

/// Which slide is showing and whether the side menu is open.
///
/// Exactly one slide is active and the index always stays in range.
#[derive(Clone, Debug)]
pub struct SlideDeck {
	slides: Vec<SlideInfo>,
	current: usize,
	menu_open: bool,
}

impl SlideDeck {
	pub fn new(slides: &[SlideInfo]) -> Self {
		Self {
			slides: slides.to_vec(),
			current: 0,
			menu_open: false,
		}
	}

	pub fn current(&self) -> usize {
		self.current
	}

	pub fn len(&self) -> usize {
		self.slides.len()
	}

	pub fn is_empty(&self) -> bool {
		self.slides.is_empty()
	}

	pub fn slides(&self) -> &[SlideInfo] {
		&self.slides
	}

	/// Activate slide `n`. Out-of-range requests are ignored; there is no wraparound.
	pub fn show(&mut self, n: usize) -> bool {
		if n >= self.slides.len() {
			return false;
		}
		self.current = n;
		true
	}

	pub fn next(&mut self) -> bool {
		self.show(self.current + 1)
	}

	pub fn prev(&mut self) -> bool {
		self.current.checked_sub(1).is_some_and(|n| self.show(n))
	}

	/// Activate the slide a menu link points at (`#id` or `id`). Unknown targets are ignored.
	pub fn show_anchor(&mut self, href: &str) -> bool {
		let id = href.strip_prefix('#').unwrap_or(href);
		match self.slides.iter().position(|s| s.id == id) {
			Some(n) => self.show(n),
			None => false,
		}
	}

	pub fn menu_open(&self) -> bool {
		self.menu_open
	}

	pub fn toggle_menu(&mut self) {
		self.menu_open = !self.menu_open;
	}

	/// Follow a side menu link: show its slide and close the menu, even if the target is unknown.
	pub fn follow_link(&mut self, href: &str) -> bool {
		self.menu_open = false;
		self.show_anchor(href)
	}

	/// Apply a keyboard key. Returns whether the key was a navigation key.
	pub fn handle_key(&mut self, key: &str) -> bool {
		match key {
			"ArrowRight" => {
				self.next();
				true
			}
			"ArrowLeft" => {
				self.prev();
				true
			}
			_ => false,
		}
	}
}

impl Default for SlideDeck {
	fn default() -> Self {
		Self::new(SLIDES)
	}
}

fn slide_nav(index: usize, deck: RwSignal<SlideDeck>) -> impl IntoView {
	let last = deck.with_untracked(|d| d.len().saturating_sub(1));
	view! {
		<nav class="slide-nav">
			<button
				class="prev"
				disabled={index == 0}
				on:click=move |_| deck.update(|d| {
					if let Some(n) = index.checked_sub(1) {
						d.show(n);
					}
				})
			>
				"Previous"
			</button>
			<span class="slide-counter">{format!("{} / {}", index + 1, last + 1)}</span>
			<button
				class="next"
				disabled={index >= last}
				on:click=move |_| deck.update(|d| {
					d.show(index + 1);
				})
			>
				"Next"
			</button>
		</nav>
	}
}

fn demo_unavailable() -> impl IntoView {
	view! { <p class="demo-error">"Demo data could not be loaded."</p> }
}

/// Toggleable side menu listing every slide.
#[component]
fn SideMenu(deck: RwSignal<SlideDeck>) -> impl IntoView {
	let links = deck
		.with_untracked(|d| d.slides().to_vec())
		.into_iter()
		.map(|slide| {
			let href = format!("#{}", slide.id);
			let target = href.clone();
			view! {
				<li>
					<a
						href=href
						class:current=move || {
							deck.with(|d| d.slides().get(d.current()).is_some_and(|s| s.id == slide.id))
						}
						on:click=move |ev: MouseEvent| {
							ev.prevent_default();
							deck.update(|d| {
								d.follow_link(&target);
							});
						}
					>
						{slide.title}
					</a>
				</li>
			}
		})
		.collect_view();

	view! {
		<button id="menu-toggle" on:click=move |_| deck.update(SlideDeck::toggle_menu)>
			"☰"
		</button>
		<nav id="side-menu" class:open=move || deck.with(SlideDeck::menu_open)>
			<ul>{links}</ul>
		</nav>
	}
}

/// The full slide deck with keyboard navigation and the side menu.
#[component]
pub fn Presentation(session: Option<SharedSession>) -> impl IntoView {
	let deck = RwSignal::new(SlideDeck::default());
	let keydown: Rc<RefCell<Option<Closure<dyn FnMut(KeyboardEvent)>>>> =
		Rc::new(RefCell::new(None));

	Effect::new(move |_| {
		let Some(window) = web_sys::window() else {
			return;
		};
		let cb: Closure<dyn FnMut(KeyboardEvent)> = Closure::new(move |ev: KeyboardEvent| {
			deck.update(|d| {
				d.handle_key(&ev.key());
			});
		});
		let _ = window.add_event_listener_with_callback("keydown", cb.as_ref().unchecked_ref());
		*keydown.borrow_mut() = Some(cb);
	});

	let active = move |n: usize| move || deck.with(|d| d.current() == n);
	let unipartite_demo = match session.clone() {
		Some(session) => view! { <UnipartiteDemo session=session /> }.into_any(),
		None => demo_unavailable().into_any(),
	};
	let bipartite_demo = match session {
		Some(session) => view! { <BipartiteDemo session=session /> }.into_any(),
		None => demo_unavailable().into_any(),
	};

	view! {
		<SideMenu deck=deck />
		<main class="slides">
			<section id="intro" class="slide" class:active={active(0)}>
				<h1>"Networks"</h1>
				<p>
					"A network is a set of nodes joined by edges. The background shows one: "
					"dots that link up whenever they drift close enough."
				</p>
				<p class="hint">"Use the arrow keys or the menu to move between slides."</p>
				{slide_nav(0, deck)}
			</section>

			<section id="unipartite" class="slide" class:active={active(1)}>
				<h2>"Unipartite graphs"</h2>
				<p>
					"Every node is the same kind of thing. The layout comes from a force "
					"simulation: edges pull, nodes push apart. Drag a node to move it; freeze "
					"the layout to pin dropped nodes in place."
				</p>
				{unipartite_demo}
				{slide_nav(1, deck)}
			</section>

			<section id="bipartite" class="slide" class:active={active(2)}>
				<h2>"Bipartite graphs"</h2>
				<p>
					"Two kinds of nodes, U and V, and edges only ever connect a U to a V. "
					"Each kind gets its own column."
				</p>
				{bipartite_demo}
				{slide_nav(2, deck)}
			</section>

			<section id="projection" class="slide" class:active={active(3)}>
				<h2>"One-mode projection"</h2>
				<p>
					"Projecting onto one side links two of its nodes whenever they share a "
					"neighbor on the other side. The weight is the number of shared neighbors, "
					"drawn as line thickness."
				</p>
				<ul>
					<li>"Project left: links U nodes through common V neighbors."</li>
					<li>"Project right: links V nodes through common U neighbors."</li>
				</ul>
				{slide_nav(3, deck)}
			</section>

			<section id="summary" class="slide" class:active={active(4)}>
				<h2>"Summary"</h2>
				<ul>
					<li>"Force layouts suit graphs with no natural coordinates."</li>
					<li>"Bipartite graphs read best in two fixed columns."</li>
					<li>"Projections trade the second node type for weighted edges."</li>
				</ul>
				{slide_nav(4, deck)}
			</section>
		</main>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn starts_on_first_slide() {
		let deck = SlideDeck::default();
		assert_eq!(deck.current(), 0);
		assert_eq!(deck.len(), SLIDES.len());
	}

	#[test]
	fn navigation_never_leaves_range() {
		let mut deck = SlideDeck::default();
		assert!(!deck.prev());
		assert_eq!(deck.current(), 0);
		for _ in 0..20 {
			deck.next();
		}
		assert_eq!(deck.current(), SLIDES.len() - 1);
		assert!(!deck.next());
		assert!(!deck.show(SLIDES.len()));
		assert!(!deck.show(usize::MAX));
		assert_eq!(deck.current(), SLIDES.len() - 1);
	}

	#[test]
	fn arrow_keys_step_through_slides() {
		let mut deck = SlideDeck::default();
		assert!(deck.handle_key("ArrowRight"));
		assert!(deck.handle_key("ArrowRight"));
		assert!(deck.handle_key("ArrowLeft"));
		assert_eq!(deck.current(), 1);
		assert!(!deck.handle_key("Enter"));
		assert_eq!(deck.current(), 1);
	}

	#[test]
	fn anchors_resolve_to_slides() {
		let mut deck = SlideDeck::default();
		assert!(deck.show_anchor("#projection"));
		assert_eq!(deck.current(), 3);
		assert!(deck.show_anchor("intro"));
		assert_eq!(deck.current(), 0);
		assert!(!deck.show_anchor("#missing"));
		assert_eq!(deck.current(), 0);
	}

	#[test]
	fn menu_toggles_and_closes_on_link() {
		let mut deck = SlideDeck::default();
		assert!(!deck.menu_open());
		deck.toggle_menu();
		assert!(deck.menu_open());
		assert!(deck.follow_link("#bipartite"));
		assert!(!deck.menu_open());
		assert_eq!(deck.current(), 2);

		deck.toggle_menu();
		deck.toggle_menu();
		assert!(!deck.menu_open());
	}

	#[test]
	fn unknown_link_still_closes_menu() {
		let mut deck = SlideDeck::default();
		deck.show(1);
		deck.toggle_menu();
		assert!(!deck.follow_link("#nowhere"));
		assert!(!deck.menu_open());
		assert_eq!(deck.current(), 1);
	}

	#[test]
	fn keys_leave_menu_alone() {
		let mut deck = SlideDeck::default();
		deck.toggle_menu();
		deck.handle_key("ArrowRight");
		assert!(deck.menu_open());
		assert_eq!(deck.current(), 1);
	}

	#[test]
	fn empty_deck_ignores_everything() {
		let mut deck = SlideDeck::new(&[]);
		assert!(deck.is_empty());
		assert!(!deck.next());
		assert!(!deck.prev());
		deck.handle_key("ArrowRight");
		assert_eq!(deck.current(), 0);
	}
}
