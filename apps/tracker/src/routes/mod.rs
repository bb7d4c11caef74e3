use actix_web::web;

use crate::middleware::jwt_extract::JwtExtract;

pub mod auth;
pub mod entries;
pub mod files;
pub mod goals;
pub mod health;
pub mod profile;

/// Register every route. Shared by `main` and the integration tests so both
/// see the same paths and the same auth wrapping.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes);
    cfg.service(web::scope("/auth").configure(auth::configure_routes));

    // Protected: JwtExtract runs before any handler below.
    cfg.service(
        web::scope("/profile")
            .wrap(JwtExtract)
            .configure(profile::configure_routes),
    );
    cfg.service(
        web::scope("/goals")
            .wrap(JwtExtract)
            .configure(goals::configure_routes),
    );
    cfg.service(
        web::scope("/entries")
            .wrap(JwtExtract)
            .configure(entries::configure_routes),
    );
    cfg.service(
        web::scope("/files")
            .wrap(JwtExtract)
            .configure(files::configure_routes),
    );
}
