//! VariantError alongside the standard error ecosystem

use std::error::Error as StdError;
use std::fmt;
use std::io;

use thiserror::Error;
use variant_error::{KindResultExt, VariantError};

#[derive(Debug, Error)]
#[error("quota exceeded for {tenant}")]
struct QuotaExceeded {
    tenant: String,
}

type StoreError = VariantError<(QuotaExceeded, io::Error)>;

fn store(tenant: &str) -> Result<(), StoreError> {
    if tenant == "full" {
        return Err(VariantError::new(QuotaExceeded {
            tenant: tenant.to_string(),
        }));
    }
    Err(io::Error::new(io::ErrorKind::NotFound, "bucket missing")).kind_err()
}

fn assert_send_sync<T: Send + Sync + 'static>() {}

#[test]
fn test_send_sync_follows_kinds() {
    assert_send_sync::<StoreError>();
    assert_send_sync::<VariantError<(fmt::Error,)>>();
}

#[test]
fn test_boxed_dyn_error() {
    let boxed: Box<dyn StdError + Send + Sync> = Box::new(store("full").unwrap_err());
    assert_eq!(boxed.to_string(), "quota exceeded for full");
    assert!(boxed.source().is_none());

    let back = boxed.downcast::<StoreError>().unwrap();
    assert!(back.is::<QuotaExceeded, _>());
}

#[test]
fn test_anyhow_question_mark() {
    fn run() -> anyhow::Result<()> {
        store("tenant-a")?;
        Ok(())
    }

    let err = run().unwrap_err();
    assert_eq!(err.to_string(), "bucket missing");

    let store_err = err.downcast_ref::<StoreError>().unwrap();
    assert_eq!(store_err.discriminant(), 1);
    assert_eq!(
        store_err.get::<io::Error, _>().map(|e| e.kind()),
        Some(io::ErrorKind::NotFound)
    );
}

#[test]
fn test_anyhow_context_wraps_message() {
    use anyhow::Context;

    let err = store("full").context("saving report").unwrap_err();
    assert_eq!(err.to_string(), "saving report");
    assert_eq!(format!("{:#}", err), "saving report: quota exceeded for full");
}
