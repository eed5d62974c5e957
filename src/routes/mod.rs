use crate::utils::webutils::{validate_admin_token, validate_token};
use actix_web::web;
use actix_web_httpauth::middleware::HttpAuthentication;

pub mod health;
pub mod validate;
pub mod user;
pub mod expertise;
pub mod mentorship;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    let user_auth = HttpAuthentication::bearer(validate_token);
    let admin_auth = HttpAuthentication::bearer(validate_admin_token);

    cfg.service(web::scope("/health").service(health::health));
    cfg.service(
        web::scope("/validate")
            .service(validate::validate)
            .wrap(user_auth.clone()),
    );
    cfg.service(
        web::scope("/user")
            .service(
                web::scope("/create")
                    .service(user::create::create)
                    .wrap(admin_auth.clone()),
            )
            .service(
                web::scope("/regenerate")
                    .service(user::regenerate::regenerate)
                    .wrap(user_auth.clone()),
            ),
    );
    cfg.service(
        web::scope("/expertise")
            .service(
                web::scope("/create")
                    .service(expertise::create_area)
                    .wrap(admin_auth),
            )
            .service(
                web::scope("/assign")
                    .service(expertise::assign_expertise)
                    .wrap(user_auth.clone()),
            )
            .service(
                web::scope("/list")
                    .service(expertise::list_areas)
                    .wrap(user_auth.clone()),
            ),
    );
    cfg.service(
        web::scope("/mentorship")
            .wrap(user_auth)
            .service(mentorship::request::request_mentorship)
            .service(mentorship::respond::respond_to_request)
            .service(mentorship::cancel::cancel_mentorship)
            .service(mentorship::complete::complete_mentorship)
            .service(mentorship::list::pending_counts)
            .service(mentorship::list::shared_expertise)
            .service(mentorship::list::list_mentorships)
            .service(mentorship::list::get_mentorship),
    );
}
