//! # Actions
//!
//! Everything a form button can do becomes an `Action`.
//! User activates Save? That's `Action::Save`.
//! User activates Quit? That's `Action::Quit`.
//!
//! The `update()` function takes the current state and an action,
//! then mutates the state and returns an `Effect` for the event loop
//! to carry out. No side effects here. Terminal I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  Effect
//! ```
//!
//! This makes the one state transition the program has ("running →
//! stopped") testable: `assert_eq!(update(&mut app, action), Effect::Quit)`.

use log::info;

use crate::core::state::App;

/// A named command bound to a form button.
///
/// The buttons used to share identical anonymous callbacks. Each button
/// now carries its own variant, so the fact that both terminate the loop
/// is a visible choice in `update()`, not an accidental duplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// The Save button. Nothing is archived; see `update()`.
    Save,
    /// The Quit button.
    Quit,
}

/// What the event loop must do after an action has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Stop the event loop and exit.
    Quit,
}

/// Apply an action to the app state and return the resulting effect.
///
/// Both buttons stop the loop. Save does not read, validate, or persist
/// any field value; there is no archive backend behind this form.
pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Save => {
            info!("Save activated; no archive backend, stopping");
            app.status_message = String::from("Saved nothing; exiting");
            Effect::Quit
        }
        Action::Quit => {
            info!("Quit activated, stopping");
            Effect::Quit
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_quits() {
        let mut app = App::new();
        assert_eq!(update(&mut app, Action::Save), Effect::Quit);
    }

    #[test]
    fn test_quit_quits() {
        let mut app = App::new();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }

    #[test]
    fn test_save_sets_status() {
        let mut app = App::new();
        update(&mut app, Action::Save);
        assert_eq!(app.status_message, "Saved nothing; exiting");
    }
}
