use anyhow::{Context, anyhow};
use hubwatch_config::{Config, LoggingConfig};
use hubwatch_primitives::DomainId;

use crate::args::Args;

/// Settings after merging the config file with command line overrides.
#[derive(Debug, Clone)]
pub(crate) struct Settings {
    local_domain: Option<DomainId>,
    pub logging: LoggingConfig,
}

impl Settings {
    pub(crate) fn from_args(args: &Args) -> anyhow::Result<Self> {
        let file = args
            .config
            .as_deref()
            .map(|path| Config::load(path).with_context(|| format!("load {}", path.display())))
            .transpose()?;

        let mut logging = file.as_ref().map(|c| c.logging.clone()).unwrap_or_default();
        logging.json_format |= args.json_logs;

        let local_domain = args
            .local_domain
            .map(DomainId::new)
            .or_else(|| file.map(|c| c.verifier.local_domain));

        Ok(Self {
            local_domain,
            logging,
        })
    }

    pub(crate) fn local_domain(&self) -> anyhow::Result<DomainId> {
        self.local_domain
            .ok_or_else(|| anyhow!("args: no --local-domain provided and no config file"))
    }
}
