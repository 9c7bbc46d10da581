mod http;

pub use http::{GreenhouseHttpController, init_controllers};
