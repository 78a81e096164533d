//! particle-hero: single-page portfolio with an animated particle backdrop.
//!
//! This crate provides a WASM single-page app whose hero section renders a
//! particle-network animation on a canvas, plus the small interactive
//! enhancements around it (typewriter heading, scroll reveal, back-to-top,
//! responsive navigation, mailto contact form).

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::hero_particles::HeroParticles;
use components::{
	back_to_top::BackToTop, contact::ContactForm, nav::NavBar, preloader::Preloader,
	reveal::Reveal, typewriter::Typewriter,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("particle-hero: logging initialized");
}

/// Page content that varies per deployment, embedded by the host page.
#[derive(Clone, Debug, Deserialize)]
pub struct SiteData {
	/// Phrases cycled by the hero typewriter.
	pub typed_phrases: Vec<String>,
	/// Recipient of the contact form's mailto message.
	pub contact_email: String,
}

impl Default for SiteData {
	fn default() -> Self {
		Self {
			typed_phrases: vec![
				"Desenvolvedor Full Stack".to_string(),
				"Entusiasta de Rust e WebAssembly".to_string(),
				"Criador de experiências web".to_string(),
			],
			contact_email: "contato@lucasschutz.dev".to_string(),
		}
	}
}

/// Load site data from a script element with id="site-data".
/// Expected format: JSON with { typed_phrases: [...], contact_email: "..." }
fn load_site_data() -> Option<SiteData> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("site-data")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<SiteData>(&json_text) {
		Ok(data) => {
			info!(
				"particle-hero: loaded {} typed phrases",
				data.typed_phrases.len()
			);
			Some(data)
		}
		Err(e) => {
			warn!("particle-hero: failed to parse site data: {}", e);
			None
		}
	}
}

/// Main application component.
/// Assembles the hero backdrop and the page's interactive enhancements.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let site = load_site_data().unwrap_or_default();

	view! {
		<Html attr:lang="pt-BR" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Lucas Schutz - Portfólio" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Preloader />
		<header id="top">
			<NavBar />
		</header>

		<main>
			<section class="hero">
				<HeroParticles />
				<div class="hero-content">
					<h1>"Olá, eu sou Lucas"</h1>
					<p class="tagline">
						<Typewriter phrases=site.typed_phrases />
					</p>
				</div>
			</section>

			<Reveal>
				<section id="about">
					<h2>"Sobre"</h2>
					<p>
						"Desenvolvedor focado em aplicações web rápidas e acessíveis, do backend ao pixel."
					</p>
				</section>
			</Reveal>

			<Reveal>
				<section id="projects">
					<h2>"Projetos"</h2>
					<p>"Uma seleção de trabalhos recentes."</p>
				</section>
			</Reveal>

			<Reveal>
				<section id="skills">
					<h2>"Habilidades"</h2>
					<p>"Rust, WebAssembly, TypeScript, e o que o problema pedir."</p>
				</section>
			</Reveal>

			<Reveal>
				<section id="contact">
					<h2>"Contato"</h2>
					<ContactForm recipient=site.contact_email />
				</section>
			</Reveal>
		</main>

		<BackToTop />
	}
}
