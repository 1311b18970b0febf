pub mod portal;
pub mod session;
pub mod workshop;

pub use portal::{PortalCommands, handle_portal_command};
pub use session::{SessionCommands, handle_session_command};
pub use workshop::{WorkshopCommands, handle_workshop_command};
