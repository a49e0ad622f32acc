//! Seam for pulling a token string out of a transport-layer request

/// Extracts a raw token from a request-like value
///
/// Implemented for every `Fn(&R) -> Option<String>`, so closures and plain
/// functions can be passed directly.
pub trait TokenResolver<R: ?Sized> {
    fn resolve(&self, request: &R) -> Option<String>;
}

impl<R, F> TokenResolver<R> for F
where
    R: ?Sized,
    F: Fn(&R) -> Option<String>,
{
    fn resolve(&self, request: &R) -> Option<String> {
        self(request)
    }
}
