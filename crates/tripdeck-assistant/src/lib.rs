pub mod client;
pub mod error;
pub mod prompt;
pub mod region;

pub use client::{ChatClient, ChatMessage, ChatRole};
pub use error::AssistantError;
pub use prompt::{build_system_prompt, ChatLocation, ChatPreferences};
pub use region::{region_info, RegionInfo};
