//! An in-memory transport and object database for exercising the fetch phases.
#![allow(dead_code)]

use std::collections::HashSet;
use std::io;

use gix_fetch_negotiate::{
    error::BoxError,
    refspec::{DefaultRefspecParser, Operation, Refspec, RefspecParser},
    transport::ProgressFn,
    Account, Advertisement, Direction, Error, Objects, Repository, TransferStats, Transport,
};
use gix_hash::ObjectId;

pub fn oid(hex: &str) -> ObjectId {
    ObjectId::from_hex(hex.as_bytes()).expect("valid hex")
}

pub const H1: &str = "1111111111111111111111111111111111111111";
pub const H2: &str = "2222222222222222222222222222222222222222";
pub const H3: &str = "3333333333333333333333333333333333333333";
pub const H4: &str = "4444444444444444444444444444444444444444";

/// An object database containing exactly the given objects.
#[derive(Default)]
pub struct Store(pub HashSet<ObjectId>);

impl gix_object::Exists for Store {
    fn exists(&self, id: &gix_hash::oid) -> bool {
        self.0.contains(id)
    }
}

pub fn repo_with(ids: &[&str]) -> Objects<Store> {
    Objects(Store(ids.iter().map(|hex| oid(hex)).collect()))
}

/// A repository whose object database cannot be opened.
pub struct Unavailable;

impl Repository for Unavailable {
    fn objects(&self) -> Result<&dyn gix_object::Exists, BoxError> {
        Err(io::Error::new(io::ErrorKind::NotFound, "objects directory missing").into())
    }
}

/// Parses like the default parser, but cannot resolve any shorthand.
pub struct UnresolvableShorthand;

impl RefspecParser for UnresolvableShorthand {
    fn parse(&self, raw: &bstr::BStr, operation: Operation) -> gix_fetch_negotiate::Result<Refspec> {
        DefaultRefspecParser.parse(raw, operation)
    }

    fn expand(&self, spec: &Refspec, _advertised: &[Advertisement]) -> gix_fetch_negotiate::Result<Refspec> {
        Err(Error::UnsupportedRefspec {
            spec: spec.raw().to_owned(),
            message: "shorthand does not resolve".into(),
        })
    }
}

#[derive(Default, Clone, Copy)]
pub struct Failures {
    pub connect: bool,
    pub list: bool,
    pub negotiate: bool,
    pub download: bool,
}

/// Records every call and replays a fixed advertisement.
#[derive(Default)]
pub struct MockTransport {
    pub advertised: Vec<Advertisement>,
    pub connected: bool,
    pub fail: Failures,
    pub connects: Vec<(Direction, bool)>,
    pub lists: usize,
    pub negotiations: Vec<Vec<Advertisement>>,
    pub downloads: usize,
    /// Stats to report during download, one progress call per entry.
    pub progress_steps: Vec<TransferStats>,
}

impl MockTransport {
    pub fn advertising(refs: &[(&str, &str)]) -> Self {
        MockTransport {
            advertised: refs.iter().map(|(name, hex)| Advertisement::new(*name, oid(hex))).collect(),
            connected: true,
            ..Default::default()
        }
    }

    pub fn disconnected(mut self) -> Self {
        self.connected = false;
        self
    }

    pub fn failing(mut self, fail: Failures) -> Self {
        self.fail = fail;
        self
    }
}

fn failure(what: &str) -> BoxError {
    io::Error::new(io::ErrorKind::ConnectionReset, format!("{what} failed")).into()
}

impl Transport for MockTransport {
    fn is_connected(&self) -> bool {
        self.connected
    }

    fn connect(&mut self, direction: Direction, credentials: Option<&Account>) -> Result<(), BoxError> {
        self.connects.push((direction, credentials.is_some()));
        if self.fail.connect {
            return Err(failure("connect"));
        }
        self.connected = true;
        Ok(())
    }

    fn list_references(&mut self) -> Result<&mut [Advertisement], BoxError> {
        self.lists += 1;
        if self.fail.list {
            return Err(failure("list"));
        }
        Ok(self.advertised.as_mut_slice())
    }

    fn negotiate(&mut self, _repository: &dyn Repository, wants: &[Advertisement]) -> Result<(), BoxError> {
        self.negotiations.push(wants.to_vec());
        if self.fail.negotiate {
            return Err(failure("negotiate"));
        }
        Ok(())
    }

    fn download_pack(
        &mut self,
        _repository: &dyn Repository,
        stats: &mut TransferStats,
        mut progress: Option<&mut ProgressFn<'_>>,
    ) -> Result<(), BoxError> {
        self.downloads += 1;
        if self.fail.download {
            return Err(failure("download"));
        }
        for step in &self.progress_steps {
            *stats = *step;
            if let Some(progress) = progress.as_deref_mut() {
                if !progress(&*stats) {
                    return Err(failure("cancelled download"));
                }
            }
        }
        Ok(())
    }
}
