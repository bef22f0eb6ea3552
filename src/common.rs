//! Common functionality shared across commands

use std::path::PathBuf;

use crate::error::DepGraphError;

/// Directory discovery starts from, falling back to `.`
pub fn working_dir() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, DepGraphError>;
}

/// Trait for configurations that can be created from parsed CLI arguments
pub trait FromCommand: Sized {
    fn from_command(cli: crate::cli::Cli) -> Result<Self, DepGraphError>;
}

/// Macro to implement `TryFrom<Cli>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Cli> for $config {
            type Error = $crate::error::DepGraphError;

            fn try_from(cli: $crate::cli::Cli) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(cli)
            }
        }
    };
}
