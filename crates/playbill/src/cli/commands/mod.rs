//! CLI command implementations

mod completions;
mod init;
mod props;
mod show;
mod validate;

pub use completions::CompletionsCommand;
pub use init::InitCommand;
pub use props::PropsCommand;
pub use show::ShowCommand;
pub use validate::ValidateCommand;
