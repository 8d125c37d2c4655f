use std::path::Path;

use actix_web::http::header::{self, HeaderMap};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse};
use handlebars::{handlebars_helper, Handlebars, JsonValue};
use serde_json::{json, Value};
use tracing::error;

use crate::error::QueryError;
use crate::query::has_quality_score;

const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";
const HTML_CACHE_CONTROL: &str = "public, max-age=120, stale-while-revalidate=60";

/// Template names and their file names under the templates directory.
const TEMPLATES: &[(&str, &str)] = &[
    ("component/head", "components/head.html"),
    ("component/nav", "components/nav.html"),
    ("component/movie-summary", "components/movie-summary.html"),
    ("index", "index.html"),
    ("data", "data.html"),
    ("movie", "movie.html"),
    ("search-by-id", "search-by-id.html"),
    ("result-by-id", "result-by-id.html"),
    ("search-by-title", "search-by-title.html"),
    ("result-by-title", "result-by-title.html"),
    ("all-data", "all-data.html"),
    ("all-data-filtered", "all-data-filtered.html"),
    ("all-data-highlight", "all-data-highlight.html"),
    ("error", "error.html"),
];

handlebars_helper!(has_metascore: |metascore: JsonValue| has_quality_score(metascore.as_str()));
handlebars_helper!(no_metascore: |metascore: JsonValue| !has_quality_score(metascore.as_str()));

pub fn build_handlebars(dir: impl AsRef<Path>) -> std::io::Result<Handlebars<'static>> {
    let dir = dir.as_ref();
    let mut hb = Handlebars::new();

    for (name, file) in TEMPLATES {
        hb.register_template_file(name, dir.join(file))
            .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidData, err))?;
    }

    hb.register_helper("has_metascore", Box::new(has_metascore));
    hb.register_helper("no_metascore", Box::new(no_metascore));

    Ok(hb)
}

pub fn prefers_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|value| value.to_str().ok())
        .map(|accept| {
            accept.split(',').any(|item| {
                let trimmed = item.split(';').next().unwrap_or(item).trim();
                trimmed == "application/json" || trimmed.ends_with("+json")
            })
        })
        .unwrap_or(false)
}

pub fn render_page(
    hb: &Handlebars<'_>,
    template: &str,
    status: StatusCode,
    context: &Value,
    req: &HttpRequest,
) -> HttpResponse {
    if prefers_json(req.headers()) {
        return HttpResponse::build(status).json(context);
    }

    match hb.render(template, context) {
        Ok(body) => {
            let mut response = HttpResponse::build(status);
            response.append_header((header::CONTENT_TYPE, HTML_CONTENT_TYPE));
            if status.is_success() {
                response.append_header((header::CACHE_CONTROL, HTML_CACHE_CONTROL));
            }
            response.body(body)
        }
        Err(err) => {
            error!(template, error = %err, "template render failed");
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn render_ok(
    hb: &Handlebars<'_>,
    template: &str,
    context: &Value,
    req: &HttpRequest,
) -> HttpResponse {
    render_page(hb, template, StatusCode::OK, context, req)
}

pub fn error_page(hb: &Handlebars<'_>, err: &QueryError, req: &HttpRequest) -> HttpResponse {
    let status = err.status_code();
    let context = json!({
        "title": err.page_title(),
        "message": err.to_string(),
        "status": status.as_u16(),
    });
    render_page(hb, "error", status, &context, req)
}
