// Suffix to server path dispatch.

use std::ffi::OsStr;

/// One suffix the reducer service knows how to compress.
#[derive(Debug, PartialEq, Eq)]
pub struct Route {
    pub suffix: &'static str,
    pub path: &'static str,
}

/// Checked in order; the first matching suffix wins.
pub const ROUTES: &[Route] = &[
    Route {
        suffix: ".js",
        path: "/js",
    },
    Route {
        suffix: ".css",
        path: "/css",
    },
    Route {
        suffix: ".less",
        path: "/less",
    },
];

/// Pick the route for a command-line argument. `None` means the file type is
/// not supported and the argument should be skipped.
///
/// Matching is done on the raw argument bytes, so paths that are not valid
/// UTF-8 are still dispatched (or rejected) by their suffix.
pub fn route_for(arg: impl AsRef<OsStr>) -> Option<&'static Route> {
    let arg = arg.as_ref().as_encoded_bytes();
    ROUTES.iter().find(|r| arg.ends_with(r.suffix.as_bytes()))
}
