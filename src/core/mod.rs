//! Platform-free logic shared by the browser front end and host-side tests.

pub mod clock;
pub mod config;
pub mod constants;
pub mod controller;
pub mod heartbeat;
pub mod input;
pub mod particles;
pub mod rng;
pub mod session;
pub mod typewriter;

pub use clock::*;
pub use config::*;
pub use controller::*;
pub use heartbeat::*;
pub use input::*;
pub use particles::*;
pub use rng::*;
pub use session::*;
pub use typewriter::*;
