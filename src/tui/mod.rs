pub mod draw;
pub mod layout;
pub mod run;
pub mod state;
pub mod views;

pub use draw::draw_frame;
pub use layout::centered_rect;
pub use run::run;
pub use state::{DashboardAction, DashboardState};
