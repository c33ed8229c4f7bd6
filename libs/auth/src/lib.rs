use std::{collections::HashSet, marker::PhantomData};

use http::{header, Request, Response, StatusCode};
use http_body::Body;
use tower_http::validate_request::ValidateRequest;

/// Accepts a request when its `Authorization` header matches any of the
/// configured values. An empty set disables the check, which keeps local
/// development and tests free of credentials.
#[derive(Debug)]
pub struct ManyValidate<ResBody> {
    header_values: HashSet<String>,
    _ty: PhantomData<fn() -> ResBody>,
}

impl<ResBody> ManyValidate<ResBody> {
    pub fn new(authorizations: Vec<String>) -> Self {
        Self {
            header_values: authorizations.into_iter().collect(),
            _ty: PhantomData,
        }
    }
}

impl<ResBody> Clone for ManyValidate<ResBody> {
    fn clone(&self) -> Self {
        Self {
            header_values: self.header_values.clone(),
            _ty: PhantomData,
        }
    }
}

impl<B, ResBody> ValidateRequest<B> for ManyValidate<ResBody>
where
    ResBody: Body + Default,
{
    type ResponseBody = ResBody;

    fn validate(&mut self, request: &mut Request<B>) -> Result<(), Response<Self::ResponseBody>> {
        if self.header_values.is_empty() {
            return Ok(());
        }
        let matched = request
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|actual| actual.to_str().ok())
            .is_some_and(|actual| self.header_values.contains(actual));
        if matched {
            Ok(())
        } else {
            let mut res = Response::new(ResBody::default());
            *res.status_mut() = StatusCode::UNAUTHORIZED;
            Err(res)
        }
    }
}
