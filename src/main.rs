use actix_web::{middleware, web, App, HttpServer};
use tracing::info;

use movie_catalog::{logging, render, routes, Catalog, Settings};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    logging::init();

    let settings = Settings::from_env();
    let catalog = Catalog::load_or_empty(&settings.data_path).await;
    let handlebars = render::build_handlebars(&settings.templates_dir)?;
    let addr = settings.bind_addr()?;

    info!(movies = catalog.len(), "listening on http://{addr}");

    let catalog_data = web::Data::new(catalog);
    let hb_data = web::Data::new(handlebars);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(catalog_data.clone())
            .app_data(hb_data.clone())
            .configure(routes::configure)
            .default_service(web::route().to(routes::wrong_route))
    })
    .bind(addr)?
    .run()
    .await
}
