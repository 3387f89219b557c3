mod events;
mod fixtures;

pub use events::{CapturedEvent, captured_events, init_test_tracing};
pub use fixtures::{fixture_path, load_fixture};
