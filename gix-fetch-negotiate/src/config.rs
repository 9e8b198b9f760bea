//! Loading remotes from git configuration.
//!
//! # Configuration Keys
//! - `remote.<name>.fetch`: multi-valued fetch refspecs, in order
//! - `remote.<name>.tagOpt`: `--no-tags` or `--tags`; automatic tag following if unset

use bstr::{BStr, ByteSlice};
use gix_config::File;

use crate::{
    refspec::{DefaultRefspecParser, Operation, RefspecParser},
    AutotagPolicy, Error, Remote, Result,
};

impl Remote {
    /// Load the remote `name` from `config`, parsing its refspecs with the default parser.
    pub fn from_config(config: &File<'static>, name: &str) -> Result<Self> {
        Self::from_config_with_parser(config, name, &DefaultRefspecParser)
    }

    /// Load the remote `name` from `config`, parsing its refspecs with `parser`.
    pub fn from_config_with_parser(config: &File<'static>, name: &str, parser: &dyn RefspecParser) -> Result<Self> {
        let mut remote = Remote::named(name);

        let fetch_key = format!("remote.{name}.fetch");
        for value in config.strings(fetch_key.as_str()).unwrap_or_default() {
            let spec = parser.parse(value.as_ref(), Operation::Fetch)?;
            remote = remote.with_fetch_refspec(spec);
        }

        let tag_key = format!("remote.{name}.tagOpt");
        if let Some(value) = config.string(tag_key.as_str()) {
            remote.download_tags = parse_tag_opt(value.as_ref(), &tag_key)?;
        }

        Ok(remote)
    }
}

fn parse_tag_opt(value: &BStr, key: &str) -> Result<AutotagPolicy> {
    match value.trim() {
        b"--no-tags" => Ok(AutotagPolicy::None),
        b"--tags" => Ok(AutotagPolicy::All),
        _ => Err(Error::Config {
            key: key.to_owned(),
            message: format!("'{value}' is not one of --no-tags, --tags"),
        }),
    }
}
