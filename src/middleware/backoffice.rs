//! Cookie gate in front of the backoffice routes.
//!
//! A single shared-secret cookie set by the login endpoint. Unauthenticated
//! requests are redirected to the login page; authenticated requests hitting
//! the login page are redirected back to the dashboard.

use crate::configuration::BackofficeSettings;
use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header,
    Error, HttpResponse,
};
use futures_util::future::LocalBoxFuture;
use std::future::{ready, Ready};

pub const LOGIN_PATH: &str = "/backoffice/login";
pub const DASHBOARD_PATH: &str = "/backoffice";

pub struct Gate {
    settings: BackofficeSettings,
}

impl Gate {
    pub fn new(settings: BackofficeSettings) -> Self {
        Self { settings }
    }
}

impl<S, B> Transform<S, ServiceRequest> for Gate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = GateMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(GateMiddleware {
            service,
            settings: self.settings.clone(),
        }))
    }
}

pub struct GateMiddleware<S> {
    service: S,
    settings: BackofficeSettings,
}

impl<S, B> Service<ServiceRequest> for GateMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let authenticated = req
            .cookie(&self.settings.cookie_name)
            .map(|cookie| cookie.value() == "true")
            .unwrap_or(false);
        let on_login_page = req.path() == LOGIN_PATH;

        let redirect_to = if !authenticated && !on_login_page {
            Some(LOGIN_PATH)
        } else if authenticated && on_login_page {
            Some(DASHBOARD_PATH)
        } else {
            None
        };

        if let Some(location) = redirect_to {
            tracing::debug!("Backoffice gate redirects {} to {}", req.path(), location);
            let (request, _) = req.into_parts();
            let response = HttpResponse::TemporaryRedirect()
                .insert_header((header::LOCATION, location))
                .finish()
                .map_into_right_body();
            return Box::pin(async move { Ok(ServiceResponse::new(request, response)) });
        }

        let fut = self.service.call(req);
        Box::pin(async move { fut.await.map(|res| res.map_into_left_body()) })
    }
}
