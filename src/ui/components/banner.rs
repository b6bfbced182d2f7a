use std::fmt;

use crate::ui::app::{RequestState, UiState};

/// Status line shown above a page body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    Loading,
    Error(String),
    Success(String),
}

impl fmt::Display for Banner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loading => f.write_str("Loading..."),
            Self::Error(message) => write!(f, "Error: {message}"),
            Self::Success(message) => write!(f, "OK: {message}"),
        }
    }
}

/// Loading indicator, error banner and success message for a page backed by
/// `request`.
pub fn banners(ui: &UiState, request: Option<&RequestState>) -> Vec<Banner> {
    let mut out = Vec::new();
    if let Some(request) = request {
        if request.loading {
            out.push(Banner::Loading);
        }
        if let Some(error) = &request.error {
            out.push(Banner::Error(error.headline()));
        }
    }
    if let Some(message) = &ui.success {
        out.push(Banner::Success(message.clone()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorPayload;

    #[test]
    fn error_banner_shows_the_headline() {
        let request = RequestState {
            loading: false,
            error: Some(ErrorPayload::from_body(
                br#"{"errors":{"city":["City is taken."]}}"#,
                "x",
            )),
        };
        let out = banners(&UiState::default(), Some(&request));
        assert_eq!(out, vec![Banner::Error("City is taken.".into())]);
    }

    #[test]
    fn idle_page_has_no_banners() {
        assert!(banners(&UiState::default(), Some(&RequestState::default())).is_empty());
    }
}
