pub mod pokemon;
pub mod remote_api;
pub mod view_state;
