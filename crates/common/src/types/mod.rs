use serde::{Deserialize, Serialize};

/// Body of the `/health` endpoint.
#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: &'static str,
}
