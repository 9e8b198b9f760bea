//! Receiving the pack after negotiation.

mod util;

use std::cell::RefCell;

use gix_fetch_negotiate::{
    refspec, ErrorKind, Fetch, FetchOptions, Remote, RemoteCallbacks, TransferStats, TransportOperation,
};
use pretty_assertions::assert_eq;
use util::*;

fn remote() -> Remote {
    Remote::named("origin").with_fetch_refspec(refspec::parse("+refs/heads/*:refs/remotes/origin/*").unwrap())
}

fn step(received_objects: usize, received_bytes: u64) -> TransferStats {
    TransferStats {
        total_objects: 3,
        received_objects,
        received_bytes,
        ..Default::default()
    }
}

#[test]
fn download_without_need_is_a_no_op() -> anyhow::Result<()> {
    let mut transport = MockTransport::advertising(&[("refs/heads/main", H1)]);
    let repo = repo_with(&[H1]);
    let mut remote = remote();
    let mut calls = 0;
    let mut callbacks = RemoteCallbacks::new().with_transfer_progress(|_| {
        calls += 1;
        true
    });

    let mut fetch = Fetch::new(&mut transport);
    fetch.negotiate(&mut remote, &repo, &FetchOptions::default())?;
    fetch.download_pack(&mut remote, &repo, Some(&mut callbacks))?;
    drop(callbacks);

    assert_eq!(calls, 0);
    assert_eq!(transport.downloads, 0);
    assert_eq!(remote.stats(), &TransferStats::default());
    Ok(())
}

#[test]
fn progress_observes_every_update_and_stats_are_kept() -> anyhow::Result<()> {
    let mut transport = MockTransport::advertising(&[("refs/heads/main", H1)]);
    transport.progress_steps = vec![step(1, 100), step(2, 200), step(3, 300)];
    let repo = repo_with(&[]);
    let mut remote = remote();
    let seen = RefCell::new(Vec::new());
    let mut callbacks = RemoteCallbacks::new().with_transfer_progress(|stats| {
        seen.borrow_mut().push(stats.received_objects);
        true
    });

    let mut fetch = Fetch::new(&mut transport);
    fetch.negotiate(&mut remote, &repo, &FetchOptions::default())?;
    fetch.download_pack(&mut remote, &repo, Some(&mut callbacks))?;
    drop(callbacks);

    assert_eq!(seen.into_inner(), vec![1, 2, 3]);
    assert_eq!(remote.stats(), &step(3, 300));
    assert_eq!(transport.downloads, 1);
    Ok(())
}

#[test]
fn download_works_without_callbacks() -> anyhow::Result<()> {
    let mut transport = MockTransport::advertising(&[("refs/heads/main", H1)]);
    transport.progress_steps = vec![step(3, 300)];
    let repo = repo_with(&[]);
    let mut remote = remote();

    let mut fetch = Fetch::new(&mut transport);
    fetch.negotiate(&mut remote, &repo, &FetchOptions::default())?;
    fetch.download_pack(&mut remote, &repo, None)?;
    fetch.download_pack(&mut remote, &repo, Some(&mut RemoteCallbacks::new()))?;

    assert_eq!(transport.downloads, 2);
    assert_eq!(remote.stats().received_objects, 3);
    Ok(())
}

#[test]
fn count_progress_mirrors_received_objects() -> anyhow::Result<()> {
    let mut transport = MockTransport::advertising(&[("refs/heads/main", H1)]);
    transport.progress_steps = vec![step(1, 10), step(3, 30)];
    let repo = repo_with(&[]);
    let mut remote = remote();
    let count = gix_features::progress::Discard;
    let mut callbacks = RemoteCallbacks::new().with_count(&count);

    let mut fetch = Fetch::new(&mut transport);
    fetch.negotiate(&mut remote, &repo, &FetchOptions::default())?;
    fetch.download_pack(&mut remote, &repo, Some(&mut callbacks))?;

    assert_eq!(remote.stats().received_objects, 3);
    Ok(())
}

#[test]
fn aborting_from_progress_fails_the_download() -> anyhow::Result<()> {
    let mut transport = MockTransport::advertising(&[("refs/heads/main", H1)]);
    transport.progress_steps = vec![step(1, 100), step(2, 200), step(3, 300)];
    let repo = repo_with(&[]);
    let mut remote = remote();
    let mut callbacks = RemoteCallbacks::new().with_transfer_progress(|stats| stats.received_objects < 2);

    let mut fetch = Fetch::new(&mut transport);
    fetch.negotiate(&mut remote, &repo, &FetchOptions::default())?;
    let err = fetch.download_pack(&mut remote, &repo, Some(&mut callbacks)).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Transport);
    assert_eq!(err.transport_operation(), Some(TransportOperation::Download));
    assert_eq!(remote.stats().received_objects, 2, "partial counters remain observable");
    Ok(())
}

#[test]
fn download_failure_is_reported() -> anyhow::Result<()> {
    let mut transport = MockTransport::advertising(&[("refs/heads/main", H1)]).failing(Failures {
        download: true,
        ..Default::default()
    });
    let repo = repo_with(&[]);
    let mut remote = remote();

    let mut fetch = Fetch::new(&mut transport);
    fetch.negotiate(&mut remote, &repo, &FetchOptions::default())?;
    let err = fetch.download_pack(&mut remote, &repo, None).unwrap_err();

    assert_eq!(err.transport_operation(), Some(TransportOperation::Download));
    assert!(remote.need_pack(), "a failed download can be retried");
    Ok(())
}
