pub mod cli_app;
pub mod command_logic;
pub mod config;
pub mod constants;
pub mod external_api;
pub mod utils;

pub use command_logic::details::show_launch_details;
pub use command_logic::launches::list_launches;
pub use command_logic::next::show_next_launch;
pub use external_api::spacex_api::SpacexApi;
