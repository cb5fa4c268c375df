//! Application state and the Elm-style `update`/`view` pair.
//!
//! Every screen change goes through `App::navigate`, so the route, the open
//! calculator and (in the browser) the URL hash stay in step.

use std::path::PathBuf;

use iced::widget::{column, container, rule, scrollable};
use iced::{Element, Length, Padding, Task, Theme};

use calc_core::routing::{self, Route};
use calc_core::{CalculatorScreen, Settings};

use crate::ui;

/// Messages driving every state change
#[derive(Debug, Clone)]
pub enum Message {
    /// Go to a route path (`/`, `/calculator/<slug>`)
    Navigate(String),
    /// A form field was edited
    FieldChanged(&'static str, String),
    /// Restore the open calculator's defaults
    ResetFields,
    ToggleSettingsMenu,
    ToggleDarkMode,
}

/// Application state
pub struct App {
    route: Route,
    /// Present exactly when `route` is a calculator
    screen: Option<CalculatorScreen>,
    settings: Settings,
    /// Where settings are saved; `None` in the browser
    settings_path: Option<PathBuf>,
    settings_menu_open: bool,
    status: String,
}

impl App {
    pub fn new(initial_route: &str, settings: Settings, settings_path: Option<PathBuf>) -> Self {
        let mut app = App {
            route: Route::Home,
            screen: None,
            settings,
            settings_path,
            settings_menu_open: false,
            status: String::new(),
        };
        app.navigate(initial_route);
        app
    }

    pub fn title(&self) -> String {
        match &self.route {
            Route::Calculator(descriptor) => format!("{} - Bangun", descriptor.title),
            Route::NotFound { .. } => "Not Found - Bangun".to_string(),
            Route::Home => "Bangun - Builder's Calculator".to_string(),
        }
    }

    pub fn theme(&self) -> Theme {
        if self.settings.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn navigate(&mut self, path: &str) {
        let route = routing::resolve(path);
        tracing::debug!(path, route = %route.path(), "navigate");

        match (self.screen.as_mut(), route.calculator()) {
            (Some(screen), Some(descriptor)) => screen.switch_to(descriptor),
            (None, Some(descriptor)) => self.screen = Some(CalculatorScreen::open(descriptor)),
            (_, None) => self.screen = None,
        }
        self.route = route;
        self.settings_menu_open = false;

        #[cfg(target_arch = "wasm32")]
        crate::web::set_hash(&self.route.path());
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigate(path) => self.navigate(&path),
            Message::FieldChanged(name, value) => {
                if let Some(screen) = self.screen.as_mut() {
                    screen.set_field(name, value);
                    if let Err(e) = screen.try_result() {
                        tracing::debug!(calculator = screen.descriptor().id, error = %e, "no result");
                    }
                }
            }
            Message::ResetFields => {
                if let Some(screen) = self.screen.as_mut() {
                    screen.reset();
                }
            }
            Message::ToggleSettingsMenu => {
                self.settings_menu_open = !self.settings_menu_open;
            }
            Message::ToggleDarkMode => {
                self.settings.dark_mode = !self.settings.dark_mode;
                self.settings_menu_open = false;
                self.persist_settings();
            }
        }
        Task::none()
    }

    fn persist_settings(&mut self) {
        let Some(path) = self.settings_path.as_ref() else {
            return;
        };
        match calc_core::save_settings(&self.settings, path) {
            Ok(()) => {
                tracing::info!(path = %path.display(), "settings saved");
                self.status.clear();
            }
            Err(e) => {
                tracing::warn!(error = %e, "could not save settings");
                self.status = format!("Could not save settings: {}", e);
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let body: Element<'_, Message> = match (&self.route, &self.screen) {
            (Route::Home, _) => ui::home::view(),
            (Route::Calculator(_), Some(screen)) => ui::calculator_page::view(screen, &self.settings.display),
            _ => ui::not_found::view(self.route.path()),
        };

        let mut page = column![ui::toolbar::view_toolbar(self.settings_menu_open)];
        if self.settings_menu_open {
            page = page.push(
                container(ui::toolbar::view_settings_menu(self.settings.dark_mode)).align_right(Length::Fill),
            );
        }

        page.push(rule::horizontal(1))
            .push(scrollable(container(body).padding(Padding::from([16, 8])).width(Length::Fill)).height(Length::Fill))
            .push(rule::horizontal(1))
            .push(ui::footer::view_footer(&self.status))
            .padding(10)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(route: &str) -> App {
        App::new(route, Settings::default(), None)
    }

    #[test]
    fn test_initial_route() {
        assert_eq!(app("/").route, Route::Home);
        assert!(app("#/calculator/brick-wall").screen.is_some());
        assert!(matches!(app("/nowhere").route, Route::NotFound { .. }));
    }

    #[test]
    fn test_edit_then_navigate_resets() {
        let mut app = app("/calculator/wall-plastering");
        let _ = app.update(Message::FieldChanged("wall_length", "4".into()));
        let _ = app.update(Message::FieldChanged("wall_height", "3".into()));
        assert!(app.screen.as_ref().and_then(|s| s.result()).is_some());

        let _ = app.update(Message::Navigate("/calculator/wall-painting".into()));
        let screen = app.screen.as_ref().unwrap();
        assert_eq!(screen.descriptor().id, "wall-painting");
        assert_eq!(screen.inputs().get("wall_length"), Some(""));

        let _ = app.update(Message::Navigate("/".into()));
        assert!(app.screen.is_none());
    }

    #[test]
    fn test_dark_mode_toggle_without_settings_file() {
        let mut app = app("/");
        let _ = app.update(Message::ToggleSettingsMenu);
        assert!(app.settings_menu_open);
        let _ = app.update(Message::ToggleDarkMode);
        assert!(app.settings.dark_mode);
        assert!(!app.settings_menu_open);
        assert!(matches!(app.theme(), Theme::Dark));
    }

    #[test]
    fn test_titles() {
        assert_eq!(app("/calculator/brick-wall").title(), "Brick Wall - Bangun");
        assert_eq!(app("/x").title(), "Not Found - Bangun");
    }
}
