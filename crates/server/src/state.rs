use service::CustomerService;

/// Shared handler state; cloned per request.
#[derive(Clone)]
pub struct ServerState {
    pub customers: CustomerService,
    /// Reply 200 instead of 404 when an update targets an unknown id.
    pub silent_update_miss: bool,
}

impl ServerState {
    pub fn new(customers: CustomerService) -> Self {
        Self { customers, silent_update_miss: false }
    }

    pub fn with_silent_update_miss(mut self, enabled: bool) -> Self {
        self.silent_update_miss = enabled;
        self
    }
}
