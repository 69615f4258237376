mod backend;

pub use backend::{BackendConfig, STATE_KEY};
