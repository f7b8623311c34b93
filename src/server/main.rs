use actix_cors::Cors;
use actix_web::{App, HttpResponse, HttpServer, Responder, web};
use clap::Parser;
use ginkgo::odsay::OdsayClient;
use log::info;
use std::sync::Arc;

mod route_api;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value = "127.0.0.1")]
    address: String,
    #[arg(short, long, default_value_t = 8080)]
    port: u16,
}

async fn index() -> impl Responder {
    HttpResponse::Ok()
        .insert_header(("Content-Type", "text/plain"))
        .body("Hello from the ginkgo lane-geometry proxy!")
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let args = Args::parse();

    let odsay = Arc::new(OdsayClient::from_env());

    info!("Starting ginkgo on {}:{}", args.address, args.port);

    HttpServer::new(move || {
        // The map frontend is served from anywhere during development.
        let cors = Cors::permissive();
        App::new()
            .wrap(cors)
            .app_data(web::Data::new(Arc::clone(&odsay)))
            .route("/", web::get().to(index))
            .service(route_api::route_to_library)
    })
    .bind((args.address, args.port))?
    .run()
    .await
}
