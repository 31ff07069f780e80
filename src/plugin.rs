//! Host registration
//!
//! A host builds the service once at startup and injects it wherever assets
//! are persisted.

use crate::assets::{AssetService, CopypartyAssets};
use crate::config::Config;
use crate::Result;
use std::sync::Arc;

pub const NAME: &str = "assets-copyparty";

pub const USAGE: &str = "\
Stores images, audio, video and other files on a copyparty server.

Disable any other assets provider before enabling this one. Set `endpoint` to
the server address and `bin` to the folder that receives uploads. `replace`
rewrites the returned URLs when the public host differs from the upload host.
Turn on `loggerInfo` when reporting a bug and include the log output.";

/// Validate `config` and build the service handed to the host registry.
pub fn apply(config: Config) -> Result<Arc<dyn AssetService>> {
    Ok(Arc::new(CopypartyAssets::new(config)?))
}
