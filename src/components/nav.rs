//! Responsive navigation bar with a hamburger toggle.

use leptos::prelude::*;

/// Anchor targets shown in the primary menu.
const MENU_ITEMS: [(&str, &str); 4] = [
	("#about", "Sobre"),
	("#projects", "Projetos"),
	("#skills", "Habilidades"),
	("#contact", "Contato"),
];

/// Site navigation. The toggle mirrors its state into `aria-expanded`;
/// following any menu link collapses the menu again.
#[component]
pub fn NavBar() -> impl IntoView {
	let (open, set_open) = signal(false);

	view! {
		<nav class="site-nav">
			<a class="brand" href="#top">"Lucas Schutz"</a>
			<button
				id="navToggle"
				class="nav-toggle"
				aria-label="Alternar menu"
				aria-expanded=move || if open.get() { "true" } else { "false" }
				on:click=move |_| set_open.update(|o| *o = !*o)
			>
				<span class="nav-toggle-bar"></span>
				<span class="nav-toggle-bar"></span>
				<span class="nav-toggle-bar"></span>
			</button>
			<ul id="primaryMenu" class="menu" class:show=move || open.get()>
				{MENU_ITEMS
					.into_iter()
					.map(|(href, label)| {
						view! {
							<li>
								<a href=href on:click=move |_| set_open.set(false)>
									{label}
								</a>
							</li>
						}
					})
					.collect_view()}
			</ul>
		</nav>
	}
}
