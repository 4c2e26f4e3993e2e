//! Tests for exit code mapping.

use std::{io, process};

use record_bench::{Error, ExitCode};

fn io_error(kind: io::ErrorKind) -> io::Error {
    io::Error::new(kind, "test error")
}

#[test]
fn io_error_kinds_map_to_sysexits() {
    assert_eq!(
        ExitCode::from(&io_error(io::ErrorKind::NotFound)),
        ExitCode::InputNotFound
    );
    assert_eq!(
        ExitCode::from(&io_error(io::ErrorKind::PermissionDenied)),
        ExitCode::PermissionDenied
    );
    assert_eq!(
        ExitCode::from(&io_error(io::ErrorKind::AlreadyExists)),
        ExitCode::OutputFailed
    );
    assert_eq!(
        ExitCode::from(&io_error(io::ErrorKind::UnexpectedEof)),
        ExitCode::IoError
    );
}

#[test]
fn crate_errors_map_by_class() {
    let config = Error::Config("bad".to_string());
    assert_eq!(ExitCode::from(&config), ExitCode::UsageError);

    let length = Error::RecordLength {
        expected: 128,
        actual: 64,
    };
    assert_eq!(ExitCode::from(&length), ExitCode::DataFormat);

    let encoding = Error::DescriptionEncoding { position: 3 };
    assert_eq!(ExitCode::from(&encoding), ExitCode::DataFormat);

    let io = Error::Io {
        path: "tasks_data.bin".to_string(),
        message: "no such file".to_string(),
        source: io_error(io::ErrorKind::NotFound),
    };
    assert_eq!(ExitCode::from(&io), ExitCode::InputNotFound);
}

#[test]
fn anyhow_errors_downcast_to_their_source() {
    let err = anyhow::Error::from(Error::Config("bad".to_string()));
    assert_eq!(ExitCode::from(&err), ExitCode::UsageError);

    let err = anyhow::Error::from(io_error(io::ErrorKind::PermissionDenied));
    assert_eq!(ExitCode::from(&err), ExitCode::PermissionDenied);

    let err = anyhow::anyhow!("opaque failure");
    assert_eq!(ExitCode::from(&err), ExitCode::Failure);
}

#[test]
fn converts_to_process_exit_code() {
    let success: process::ExitCode = ExitCode::Success.into();
    let usage: process::ExitCode = ExitCode::UsageError.into();

    // `process::ExitCode` has no accessor; formatting shows the raw value.
    assert_eq!(format!("{success:?}"), format!("{:?}", process::ExitCode::from(0)));
    assert_eq!(format!("{usage:?}"), format!("{:?}", process::ExitCode::from(64)));
}
