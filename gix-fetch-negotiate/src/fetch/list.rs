use super::{wants::synthesize_head, Fetch};
use crate::{Direction, Error, Remote, Result, TransportOperation};

/// Separates object ids in the output of [`Fetch::list_remote_ids()`].
pub const ID_DELIMITER: char = ';';

impl Fetch<'_> {
    /// Connect if needed and return the hex ids of all references advertised by the remote,
    /// in advertisement order and separated by [`ID_DELIMITER`].
    ///
    /// Unlike [`filter_wants()`](Self::filter_wants) this neither consults the object database
    /// nor filters by refspec; every advertised reference contributes its id. If `remote` has no
    /// active refspecs, the default `HEAD` refspec is synthesized just like during negotiation.
    /// The wants of `remote` are cleared, but a pack a previous negotiation asked for stays pending.
    pub fn list_remote_ids(&mut self, remote: &mut Remote) -> Result<String> {
        let _span = gix_trace::coarse!("gix_fetch_negotiate::Fetch::list_remote_ids()");
        if !self.transport.is_connected() {
            self.transport
                .connect(Direction::Fetch, None)
                .map_err(Error::transport(TransportOperation::Connect))?;
        }
        remote.wants.clear();

        let advertised = self
            .transport
            .list_references()
            .map_err(Error::transport(TransportOperation::List))?;
        if remote.active.is_empty() {
            synthesize_head(self.parser, remote, advertised)?;
        }

        let mut out = String::with_capacity(advertised.len() * 41);
        for (index, head) in advertised.iter().enumerate() {
            if index > 0 {
                out.push(ID_DELIMITER);
            }
            out.push_str(&head.id.to_hex().to_string());
        }
        gix_trace::debug!(advertised = advertised.len(), "listed remote ids");
        Ok(out)
    }
}
