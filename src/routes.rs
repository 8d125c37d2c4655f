use actix_web::{web, HttpRequest, HttpResponse};
use handlebars::Handlebars;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::catalog::Catalog;
use crate::error::QueryError;
use crate::render::{error_page, render_ok};

#[derive(Debug, Deserialize)]
pub struct IdSearch {
    movie_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TitleSearch {
    movie_title: Option<String>,
}

async fn home(hb: web::Data<Handlebars<'_>>, req: HttpRequest) -> HttpResponse {
    render_ok(&hb, "index", &json!({ "title": "Home Page" }), &req)
}

async fn data_summary(
    catalog: web::Data<Catalog>,
    hb: web::Data<Handlebars<'_>>,
    req: HttpRequest,
) -> HttpResponse {
    let context = json!({
        "title": "All Movies",
        "count": catalog.len(),
        "movies": catalog.as_slice(),
    });
    render_ok(&hb, "data", &context, &req)
}

async fn movie_page(
    index: web::Path<String>,
    catalog: web::Data<Catalog>,
    hb: web::Data<Handlebars<'_>>,
    req: HttpRequest,
) -> HttpResponse {
    match catalog.movie_at(index.as_str()) {
        Ok(movie) => {
            let context = json!({
                "title": movie.title.as_deref().unwrap_or("Movie"),
                "index": index.as_str(),
                "movie": movie,
            });
            render_ok(&hb, "movie", &context, &req)
        }
        Err(err) => error_page(&hb, &err, &req),
    }
}

async fn search_by_id_form(hb: web::Data<Handlebars<'_>>, req: HttpRequest) -> HttpResponse {
    render_ok(&hb, "search-by-id", &json!({ "title": "Search by Movie ID" }), &req)
}

async fn search_by_id_result(
    query: web::Query<IdSearch>,
    catalog: web::Data<Catalog>,
    hb: web::Data<Handlebars<'_>>,
    req: HttpRequest,
) -> HttpResponse {
    let id = query.movie_id.as_deref().unwrap_or_default();
    match catalog.movie_by_id(id) {
        Ok(movie) => {
            let context = json!({ "title": "Search Result", "movie": movie });
            render_ok(&hb, "result-by-id", &context, &req)
        }
        Err(err) => error_page(&hb, &err, &req),
    }
}

async fn search_by_title_form(hb: web::Data<Handlebars<'_>>, req: HttpRequest) -> HttpResponse {
    render_ok(
        &hb,
        "search-by-title",
        &json!({ "title": "Search Movie by Title" }),
        &req,
    )
}

async fn search_by_title_result(
    query: web::Query<TitleSearch>,
    catalog: web::Data<Catalog>,
    hb: web::Data<Handlebars<'_>>,
    req: HttpRequest,
) -> HttpResponse {
    let search_title = query.movie_title.as_deref();
    let results = match catalog.search_by_title(search_title) {
        Ok(results) => results,
        Err(err) => return error_page(&hb, &err, &req),
    };

    if results.is_empty() {
        let err = QueryError::NoTitleMatches {
            query: search_title.unwrap_or_default().to_owned(),
        };
        return error_page(&hb, &err, &req);
    }

    debug!(query = ?search_title, matches = results.len(), "title search");
    let context = json!({
        "title": "Search Results",
        "searchTitle": search_title,
        "results": results,
    });
    render_ok(&hb, "result-by-title", &context, &req)
}

async fn all_data(
    catalog: web::Data<Catalog>,
    hb: web::Data<Handlebars<'_>>,
    req: HttpRequest,
) -> HttpResponse {
    let context = json!({ "title": "All Movies Data", "movies": catalog.as_slice() });
    render_ok(&hb, "all-data", &context, &req)
}

async fn all_data_filtered(
    catalog: web::Data<Catalog>,
    hb: web::Data<Handlebars<'_>>,
    req: HttpRequest,
) -> HttpResponse {
    let context = json!({
        "title": "All Movies (Filtered by Metascore)",
        "movies": catalog.as_slice(),
    });
    render_ok(&hb, "all-data-filtered", &context, &req)
}

async fn all_data_highlight(
    catalog: web::Data<Catalog>,
    hb: web::Data<Handlebars<'_>>,
    req: HttpRequest,
) -> HttpResponse {
    let context = json!({
        "title": "All Movies with Highlighted Metascore",
        "movies": catalog.as_slice(),
    });
    render_ok(&hb, "all-data-highlight", &context, &req)
}

/// Fallback for every request no route claims.
pub async fn wrong_route(hb: web::Data<Handlebars<'_>>, req: HttpRequest) -> HttpResponse {
    error_page(&hb, &QueryError::UnroutedRequest, &req)
}

/// Every page answers with and without a trailing slash.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(home)))
        .service(web::resource(["/data", "/data/"]).route(web::get().to(data_summary)))
        .service(
            web::resource(["/data/movie/{index}", "/data/movie/{index}/"])
                .route(web::get().to(movie_page)),
        )
        .service(
            web::resource(["/search/id", "/search/id/"]).route(web::get().to(search_by_id_form)),
        )
        .service(
            web::resource(["/search/id/result", "/search/id/result/"])
                .route(web::get().to(search_by_id_result)),
        )
        .service(
            web::resource(["/search/title", "/search/title/"])
                .route(web::get().to(search_by_title_form)),
        )
        .service(
            web::resource(["/search/title/result", "/search/title/result/"])
                .route(web::get().to(search_by_title_result)),
        )
        .service(web::resource(["/allData", "/allData/"]).route(web::get().to(all_data)))
        .service(
            web::resource(["/allDataFiltered", "/allDataFiltered/"])
                .route(web::get().to(all_data_filtered)),
        )
        .service(
            web::resource(["/allDataHighlight", "/allDataHighlight/"])
                .route(web::get().to(all_data_highlight)),
        );
}
