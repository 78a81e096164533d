//! Cyclic type-and-delete text effect for the hero heading.
//!
//! A small state machine types each phrase out character by character,
//! holds it, deletes it, and moves to the next phrase. The pure state
//! machine is separated from the DOM so it can be tested natively; the
//! component drives it with self-rescheduling `setTimeout` callbacks at
//! the pace the step function reports.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

/// Milliseconds per typed character.
const TYPE_SPEED_MS: i32 = 36;
/// Milliseconds per deleted character.
const DELETE_SPEED_MS: i32 = 22;
/// Pause with the full phrase on screen before deleting starts.
const HOLD_MS: i32 = 1400;

/// Typing progress across the phrase list. Each [`TypewriterState::step`]
/// produces the next visible text and the delay until the following step.
pub struct TypewriterState {
	phrases: Vec<String>,
	phrase_index: usize,
	char_index: usize,
	deleting: bool,
}

impl TypewriterState {
	/// State positioned before the first character of the first phrase.
	pub fn new(phrases: Vec<String>) -> Self {
		Self {
			phrases,
			phrase_index: 0,
			char_index: 0,
			deleting: false,
		}
	}

	fn current(&self) -> &str {
		self.phrases
			.get(self.phrase_index)
			.map(String::as_str)
			.unwrap_or("")
	}

	fn prefix(&self) -> String {
		// Indexing by char keeps multi-byte text (accents etc.) intact.
		self.current().chars().take(self.char_index).collect()
	}

	/// Advance one character in the current direction and report the new
	/// visible text plus the delay until the next step.
	pub fn step(&mut self) -> (String, i32) {
		let len = self.current().chars().count();

		if !self.deleting {
			self.char_index += 1;
			let text = self.prefix();
			if self.char_index >= len {
				self.deleting = true;
				return (text, HOLD_MS);
			}
			return (text, TYPE_SPEED_MS);
		}

		self.char_index = self.char_index.saturating_sub(1);
		let text = self.prefix();
		if self.char_index == 0 {
			self.deleting = false;
			self.phrase_index = (self.phrase_index + 1) % self.phrases.len().max(1);
		}
		let delay = if self.deleting {
			DELETE_SPEED_MS
		} else {
			TYPE_SPEED_MS
		};
		(text, delay)
	}
}

/// Types the given phrases in a loop inside a `<span class="typed">`.
#[component]
pub fn Typewriter(phrases: Vec<String>) -> impl IntoView {
	let (text, set_text) = signal(String::new());
	let state = Rc::new(RefCell::new(TypewriterState::new(phrases)));
	let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

	Effect::new(move |_| {
		if state.borrow().phrases.is_empty() {
			return;
		}

		let (state_tick, tick_inner) = (state.clone(), tick.clone());
		*tick.borrow_mut() = Some(Closure::new(move || {
			let (next, delay) = state_tick.borrow_mut().step();
			set_text.set(next);
			if let (Some(win), Some(cb)) = (web_sys::window(), tick_inner.borrow().as_ref()) {
				let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
					cb.as_ref().unchecked_ref(),
					delay,
				);
			}
		}));
		if let (Some(win), Some(cb)) = (web_sys::window(), tick.borrow().as_ref()) {
			let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
				cb.as_ref().unchecked_ref(),
				TYPE_SPEED_MS,
			);
		}
	});

	view! { <span class="typed">{text}</span> }
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn types_holds_deletes_and_advances() {
		let mut state = TypewriterState::new(vec!["ab".into(), "c".into()]);

		assert_eq!(state.step(), ("a".into(), TYPE_SPEED_MS));
		assert_eq!(state.step(), ("ab".into(), HOLD_MS));
		assert_eq!(state.step(), ("a".into(), DELETE_SPEED_MS));
		// Emptying flips direction and moves to the next phrase.
		assert_eq!(state.step(), (String::new(), TYPE_SPEED_MS));
		assert_eq!(state.step(), ("c".into(), HOLD_MS));
	}

	#[test]
	fn single_phrase_loops_onto_itself() {
		let mut state = TypewriterState::new(vec!["hi".into()]);
		for _ in 0..3 {
			assert_eq!(state.step().0, "h");
			assert_eq!(state.step().0, "hi");
			assert_eq!(state.step().0, "h");
			assert_eq!(state.step().0, "");
		}
	}

	#[test]
	fn multibyte_phrases_slice_on_char_boundaries() {
		let mut state = TypewriterState::new(vec!["éü".into()]);
		assert_eq!(state.step().0, "é");
		assert_eq!(state.step().0, "éü");
	}
}
