
pub use mock_launcher::*;
pub use mock_signaling::*;
