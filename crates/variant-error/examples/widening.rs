//! Widening Example
//!
//! Layers of a small service each fail with their own narrow set of error
//! kinds. Callers widen those sets as errors travel up, then handle the kinds
//! they care about one at a time.
//!
//! Run with:
//! ```bash
//! cargo run -p variant-error --example widening
//! ```

use std::io;

use thiserror::Error;
use variant_error::{KindResultExt, VariantError, VariantResultExt};

#[derive(Debug, Error)]
#[error("port {0} is out of range")]
struct OutOfRange(u32);

#[derive(Debug, Error)]
#[error("permission denied: {0}")]
struct PermissionDenied(&'static str);

type ConfigError = VariantError<(OutOfRange,)>;
type ServiceKinds = (io::Error, PermissionDenied, OutOfRange);
type ServiceError = VariantError<ServiceKinds>;

fn parse_port(raw: u32) -> Result<u16, ConfigError> {
    u16::try_from(raw).map_err(|_| OutOfRange(raw).into())
}

fn bind(port: u16) -> Result<(), VariantError<(io::Error, PermissionDenied)>> {
    if port < 1024 {
        return Err(VariantError::new(PermissionDenied("privileged port")));
    }
    Err(io::Error::new(io::ErrorKind::AddrInUse, "address in use")).kind_err()
}

fn start(raw: u32) -> Result<(), ServiceError> {
    let port = parse_port(raw).cast_err::<ServiceKinds, _>()?;
    bind(port).err_add_back::<OutOfRange>()?;
    Ok(())
}

fn main() {
    println!("Widening Example");
    println!("================\n");

    for raw in [80, 8080, 70_000] {
        let err = match start(raw) {
            Ok(()) => {
                println!("  {raw}: started");
                continue;
            }
            Err(err) => err,
        };

        println!("  {raw}: {} [{}]", err, err.kind_name());

        match err.narrow::<PermissionDenied, _>() {
            Ok(denied) => println!("    retry with elevated rights ({denied})"),
            Err(rest) => println!("    not recoverable here: {}", rest.report()),
        }
    }

    println!();
    println!("Kinds a service error can hold:");
    for kind in ServiceError::kinds() {
        println!("  - {kind}");
    }
}
