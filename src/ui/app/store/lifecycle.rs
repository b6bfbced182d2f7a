use crate::domain::ErrorPayload;

/// Request status carried by every slice.
///
/// `start` → `settle`: a started request ends with exactly one of a value or
/// an error, and `loading` is false again either way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestState {
    pub loading: bool,
    pub error: Option<ErrorPayload>,
}

impl RequestState {
    pub fn start(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Apply a finished request. Returns the value on success so the caller
    /// can merge it into its slice; on failure the error is recorded.
    pub fn settle<T>(&mut self, result: Result<T, ErrorPayload>) -> Option<T> {
        self.loading = false;
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.error = Some(err);
                None
            }
        }
    }

    pub fn is_idle(&self) -> bool {
        !self.loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_clears_previous_error() {
        let mut state = RequestState {
            loading: false,
            error: Some(ErrorPayload::message("old")),
        };
        state.start();
        assert_eq!(
            state,
            RequestState {
                loading: true,
                error: None
            }
        );
    }

    #[test]
    fn settle_success_and_failure() {
        let mut state = RequestState::default();
        state.start();
        assert_eq!(state.settle::<u8>(Ok(3)), Some(3));
        assert!(state.is_idle());
        assert!(state.error.is_none());

        state.start();
        assert_eq!(state.settle::<u8>(Err(ErrorPayload::message("boom"))), None);
        assert!(state.is_idle());
        assert_eq!(state.error, Some(ErrorPayload::message("boom")));
    }
}
