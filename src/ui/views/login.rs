use crate::ui::app::AppState;
use crate::ui::components::{Screen, banners};

pub fn login_screen(state: &AppState) -> Screen {
    let mut screen = Screen::new("Admin Login", banners(&state.ui, Some(&state.auth.request)));
    screen.field_errors(&state.ui.form_errors);
    if let Some(user) = &state.auth.user {
        screen.lines(vec![format!("Signed in as {}", user.name)]);
    }
    screen
}

pub fn register_screen(state: &AppState) -> Screen {
    let mut screen = Screen::new(
        "Register Admin",
        banners(&state.ui, Some(&state.auth.request)),
    );
    screen.field_errors(&state.ui.form_errors);
    screen
}
