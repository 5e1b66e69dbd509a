use actix_web::web;

pub mod auth;
pub mod posts;
pub mod saved;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .route("/login", web::post().to(auth::login))
            .route("/logout", web::post().to(auth::logout)),
    )
    .service(
        web::scope("/posts")
            .route("", web::get().to(posts::list))
            .route("", web::post().to(posts::create))
            .service(
                web::resource("/{id}")
                    .route(web::patch().to(posts::set_active))
                    .route(web::delete().to(posts::delete)),
            ),
    )
    .service(
        web::scope("/saved")
            .route("", web::get().to(saved::list))
            .route("", web::post().to(saved::save))
            .route("", web::delete().to(saved::unsave)),
    );
}
