//! Dashboard state and behavior, independent of the terminal.

pub mod channels;
pub mod command;
pub mod container_settings;
pub mod dispatcher;
pub mod model;
pub mod scheduler;
pub mod tabs;
pub mod toast;

pub use command::{Command, Update};
pub use dispatcher::Dispatcher;
pub use model::{DashboardModel, Loadable};
pub use scheduler::PollingScheduler;
pub use tabs::Tab;
pub use toast::ToastKind;
