use gotham::helpers::http::response::create_response;
use gotham::middleware::state::StateMiddleware;
use gotham::pipeline::{single_middleware, single_pipeline};
use gotham::router::response::StaticResponseExtender;
use gotham::router::{builder::*, Router};
use gotham::state::{FromState, State};
use gotham_derive::StateData;
use hyper::header::{HeaderValue, CACHE_CONTROL, CONTENT_TYPE};
use hyper::{Body, Response, StatusCode};
use serde_derive::Deserialize;

pub mod catalog;
pub mod format;
pub mod models;
pub mod page;
pub mod search;
pub mod settings;

use crate::catalog::catalog;
use crate::search::Query;
use crate::settings::Site;

include!(concat!(env!("OUT_DIR"), "/templates.rs"));

pub fn router(site: Site) -> Router {
    let (chain, pipelines) = single_pipeline(single_middleware(StateMiddleware::new(site)));
    build_router(chain, pipelines, |route| {
        route
            .get("/")
            .with_query_string_extractor::<SearchParams>()
            .to(serve_index);
        route
            .get("/events")
            .with_query_string_extractor::<SearchParams>()
            .to(serve_index);

        route
            .get("/static/:name")
            .with_path_extractor::<StaticPath>()
            .to(serve_static);
    })
}

#[derive(Deserialize, StateData)]
struct SearchParams {
    q: Option<String>,
}

impl StaticResponseExtender for SearchParams {
    type ResBody = Body;

    fn extend(_state: &mut State, res: &mut Response<Body>) {
        let err = Error::BadQuery;
        log::debug!("rejected search request: {}", err);
        *res.status_mut() = err.status_code();
        res.headers_mut().insert(
            CONTENT_TYPE,
            HeaderValue::from_static("text/plain; charset=utf-8"),
        );
        *res.body_mut() = Body::from(format!("Error: {}", err));
    }
}

fn serve_index(mut state: State) -> (State, Response<Body>) {
    let params = SearchParams::take_from(&mut state);
    let query = Query::new(params.q.unwrap_or_default());

    let response = match page::render(Site::borrow_from(&state), catalog(), &query) {
        Ok(body) => create_response(&state, StatusCode::OK, mime::TEXT_HTML_UTF_8, body),
        Err(err) => err.as_response(&state),
    };

    (state, response)
}

#[derive(Deserialize, StateData, StaticResponseExtender)]
struct StaticPath {
    name: String,
}

fn serve_static(state: State) -> (State, Response<Body>) {
    let name = &StaticPath::borrow_from(&state).name;

    let response = match templates::statics::StaticFile::get(name) {
        Some(file) => {
            let mut response =
                create_response(&state, StatusCode::OK, file.mime.clone(), file.content);
            // Names carry a content hash, so they never go stale.
            response.headers_mut().insert(
                CACHE_CONTROL,
                HeaderValue::from_static("public, max-age=31536000, immutable"),
            );
            response
        }
        None => Error::StaticNotFound(name.clone()).as_response(&state),
    };

    (state, response)
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Static file not found: {0}")]
    StaticNotFound(String),
    #[error("Invalid search query")]
    BadQuery,
    #[error("Failed to render page")]
    Render(#[source] std::io::Error),
}

impl Error {
    fn as_response(&self, state: &State) -> Response<Body> {
        if let Error::Render(err) = self {
            log::error!("{}: {}", self, err);
        }
        create_response(
            state,
            self.status_code(),
            mime::TEXT_PLAIN_UTF_8,
            format!("Error: {}", self),
        )
    }

    fn status_code(&self) -> StatusCode {
        use Error::*;
        match self {
            StaticNotFound(..) => StatusCode::NOT_FOUND,
            BadQuery => StatusCode::BAD_REQUEST,
            Render(..) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
