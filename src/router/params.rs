//! Request-scoped path parameters.
//!
//! The dispatcher builds a fresh [`Params`] for every matched request and
//! stores it in that request's extensions, so bindings never outlive the
//! request and are never shared between requests.

use axum::http::Request;

/// Path parameters bound while matching one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    entries: Vec<(String, String)>,
}

impl Params {
    /// Value bound to `name`, if the matched pattern declared it.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Bindings in pattern order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn insert(&mut self, name: String, value: String) {
        self.entries.push((name, value));
    }
}

/// Returns the value bound to `name` for this request, or `""` when the
/// request was not routed or its pattern has no such parameter.
///
/// # Example
///
/// ```rust,ignore
/// router.get("/user/:name", |req: Request| async move {
///     let name = params(&req, "name").to_string();
///     Ok::<_, HandlerError>(name)
/// })?;
/// ```
pub fn params<'a, B>(req: &'a Request<B>, name: &str) -> &'a str {
    req.extensions()
        .get::<Params>()
        .and_then(|p| p.get(name))
        .unwrap_or("")
}

/// Method-style access to [`params`].
pub trait RequestParamsExt {
    /// See [`params`].
    fn param(&self, name: &str) -> &str;

    /// Every binding for this request, if it was routed.
    fn path_params(&self) -> Option<&Params>;
}

impl<B> RequestParamsExt for Request<B> {
    fn param(&self, name: &str) -> &str {
        params(self, name)
    }

    fn path_params(&self) -> Option<&Params> {
        self.extensions().get::<Params>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_with(params: Option<Params>) -> Request<()> {
        let mut req = Request::builder().uri("/").body(()).unwrap();
        if let Some(p) = params {
            req.extensions_mut().insert(p);
        }
        req
    }

    #[test]
    fn test_params_lookup() {
        let mut p = Params::default();
        p.insert("name".to_string(), "john".to_string());
        let req = request_with(Some(p));

        assert_eq!(params(&req, "name"), "john");
        assert_eq!(req.param("name"), "john");
        assert_eq!(params(&req, "id"), "");
        assert_eq!(req.path_params().map(Params::len), Some(1));
    }

    #[test]
    fn test_params_absent_on_unrouted_request() {
        let req = request_with(None);
        assert_eq!(params(&req, "name"), "");
        assert!(req.path_params().is_none());
    }

    #[test]
    fn test_iter_preserves_pattern_order() {
        let mut p = Params::default();
        p.insert("b".to_string(), "2".to_string());
        p.insert("a".to_string(), "1".to_string());

        let pairs: Vec<_> = p.iter().collect();
        assert_eq!(pairs, vec![("b", "2"), ("a", "1")]);
        assert!(!p.is_empty());
    }
}
