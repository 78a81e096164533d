//! Contact form that hands the message off to the visitor's mail client.
//!
//! There is no backend: submission validates the fields, builds a
//! `mailto:` URL with the subject and body percent-encoded, and navigates
//! to it. A status line reports progress and the form resets shortly
//! after.

use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::SubmitEvent;

/// How long the "opening your mail client" status stays up before the
/// form resets.
const RESET_DELAY_MS: i32 = 2000;

fn encode(component: &str) -> String {
	js_sys::encode_uri_component(component).into()
}

fn mailto_url(to: &str, name: &str, email: &str, message: &str) -> String {
	let subject = encode(&format!("Contato via Portfólio - {name}"));
	let body = encode(&format!("Nome: {name}\nEmail: {email}\n\nMensagem:\n{message}"));
	format!("mailto:{to}?subject={subject}&body={body}")
}

/// Contact form composing a `mailto:` message to `recipient`.
#[component]
pub fn ContactForm(recipient: String) -> impl IntoView {
	let (status, set_status) = signal(String::new());
	let form_ref = NodeRef::<leptos::html::Form>::new();
	let name_ref = NodeRef::<leptos::html::Input>::new();
	let email_ref = NodeRef::<leptos::html::Input>::new();
	let message_ref = NodeRef::<leptos::html::Textarea>::new();
	let recipient = Rc::new(recipient);

	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();

		let value = |s: Option<String>| s.map(|v| v.trim().to_string()).unwrap_or_default();
		let name = value(name_ref.get().map(|i| i.value()));
		let email = value(email_ref.get().map(|i| i.value()));
		let message = value(message_ref.get().map(|t| t.value()));

		if name.is_empty() || email.is_empty() || message.is_empty() {
			set_status.set("Preencha todos os campos.".to_string());
			return;
		}

		let Some(window) = web_sys::window() else {
			return;
		};
		let url = mailto_url(&recipient, &name, &email, &message);
		if window.location().set_href(&url).is_err() {
			log::warn!("contact: failed to open mail client");
			set_status.set("Não foi possível abrir o cliente de email.".to_string());
			return;
		}
		set_status.set("Abrindo seu cliente de email...".to_string());

		let reset = Closure::once_into_js(move || {
			set_status.set(String::new());
			if let Some(form) = form_ref.get_untracked() {
				form.reset();
			}
		});
		let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
			reset.as_ref().unchecked_ref(),
			RESET_DELAY_MS,
		);
	};

	view! {
		<form id="contactForm" node_ref=form_ref on:submit=on_submit>
			<label for="name">"Nome"</label>
			<input id="name" node_ref=name_ref type="text" autocomplete="name" />
			<label for="email">"Email"</label>
			<input id="email" node_ref=email_ref type="email" autocomplete="email" />
			<label for="message">"Mensagem"</label>
			<textarea id="message" node_ref=message_ref rows="5"></textarea>
			<button type="submit">"Enviar"</button>
			<p id="formStatus" role="status">{status}</p>
		</form>
	}
}
