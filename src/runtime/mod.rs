//! Application runtime: the mounted shell, the terminal session loop and
//! process restart.

pub mod restart;
pub mod session;
pub mod shell;

pub use restart::ProcessRestarter;
pub use session::{run_mount, Session, SessionExit};
pub use shell::AppShell;
