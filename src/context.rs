/// The slice of an inbound request the CORS engine looks at.
///
/// `origin` is the raw `Origin` header value. `None` and `Some("")` are both treated as a
/// same-origin request.
#[derive(Debug, Clone, Copy)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub origin: Option<&'a str>,
}

impl<'a> RequestContext<'a> {
    pub fn new(method: &'a str, origin: Option<&'a str>) -> Self {
        Self { method, origin }
    }

    pub(crate) fn cross_origin(&self) -> Option<&'a str> {
        self.origin.filter(|origin| !origin.is_empty())
    }
}
