//! Client-side fetch negotiation for gitoxide.
//!
//! Given the references a remote advertises, this crate decides which of them are wanted
//! according to the remote's refspecs and autotag policy, which of the wanted objects already
//! exist locally, and whether a pack has to be negotiated and downloaded at all.
//!
//! The wire protocol, the object database and reference storage are external; they are reached
//! through the [`Transport`] and [`Repository`] traits. Refspec parsing and reference name validation
//! have defaults backed by `gix-refspec` and `gix-validate` that can be replaced.
//!
//! # Example
//!
//! ```no_run
//! use gix_fetch_negotiate::{Fetch, FetchOptions, Remote, RemoteCallbacks, Repository, Transport};
//!
//! fn fetch(transport: &mut dyn Transport, repo: &dyn Repository) -> Result<(), gix_fetch_negotiate::Error> {
//!     let mut remote = Remote::named("origin")
//!         .with_fetch_refspec(gix_fetch_negotiate::refspec::parse("+refs/heads/*:refs/remotes/origin/*")?);
//!     let mut fetch = Fetch::new(transport);
//!     fetch.negotiate(&mut remote, repo, &FetchOptions::default())?;
//!     let mut callbacks = RemoteCallbacks::new().with_transfer_progress(|stats| {
//!         eprintln!("{} objects", stats.received_objects);
//!         true
//!     });
//!     fetch.download_pack(&mut remote, repo, Some(&mut callbacks))
//! }
//! ```
//!
//! Diagnostics are emitted through `gix-trace` and reach a `tracing` subscriber if the `tracing` feature is enabled.

#![deny(rust_2018_idioms)]
#![forbid(unsafe_code)]

pub mod error;
pub mod fetch;
pub mod interrupt;
pub mod progress;
pub mod refspec;
pub mod transport;
pub mod validate;

mod config;
mod remote;
mod repository;
mod types;

pub use error::{Error, ErrorKind, Result, TransportOperation};
pub use fetch::Fetch;
pub use interrupt::CancellationFlag;
pub use progress::RemoteCallbacks;
pub use refspec::Refspec;
pub use remote::Remote;
pub use repository::{Objects, Repository};
pub use transport::Transport;
pub use types::*;
