pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::auth;
pub use modules::driver_verification;
pub use modules::email;
pub use modules::otp;
pub use modules::rating;
pub use modules::ride;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::RoleQueryPostgres;
use crate::auth::application::helpers::AdminGuard;
use crate::auth::application::ports::outgoing::{RoleQuery, TokenProvider};

use crate::driver_verification::adapter::outgoing::DriverVerificationRepositoryPostgres;
use crate::driver_verification::application::driver_verification_use_cases::DriverVerificationUseCases;
use crate::driver_verification::application::services::{
    ListVerificationsService, ReviewVerificationService, SubmitVerificationService,
};

use crate::email::adapter::outgoing::{LogEmailSender, SmtpEmailSender};
use crate::email::application::ports::outgoing::EmailSender;
use crate::email::application::services::OtpEmailService;

use crate::otp::adapter::outgoing::EmailVerificationRepositoryPostgres;
use crate::otp::application::otp_use_cases::OtpUseCases;
use crate::otp::application::services::{IssueOtpService, VerifyOtpService};

use crate::rating::adapter::outgoing::RatingRepositoryPostgres;
use crate::rating::application::ports::incoming::use_cases::CreateRatingUseCase;
use crate::rating::application::services::CreateRatingService;

use crate::ride::adapter::outgoing::{RideQueryPostgres, RideRepositoryPostgres};
use crate::ride::application::domain::fare::FarePolicy;
use crate::ride::application::ride_use_cases::RideUseCases;
use crate::ride::application::services::{CreateRideService, QuoteFareService, SearchRidesService};

use crate::api::openapi::ApiDoc;
use crate::shared::api::{cors_headers, custom_json_config, preflight_or_not_found};
use crate::shared::config::{load_dotenv, AppConfig, MailTransport};

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub otp: OtpUseCases,
    pub ride: RideUseCases,
    pub driver_verification: DriverVerificationUseCases,
    pub create_rating_use_case: Arc<dyn CreateRatingUseCase + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    load_dotenv();

    let config = AppConfig::from_env().context("Invalid application configuration")?;
    let jwt_config = JwtConfig::from_env().context("Invalid JWT configuration")?;

    info!(
        environment = %config.environment,
        expose_dev_otp = config.expose_dev_otp,
        "Configuration loaded"
    );

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(50)
        .min_connections(5)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;

    if config.run_migrations {
        Migrator::up(&conn, None)
            .await
            .context("Failed to run database migrations")?;
        info!("Database migrations applied");
    }

    let db_arc = Arc::new(conn);

    // Outgoing mail
    let email_sender: Arc<dyn EmailSender + Send + Sync> = match &config.mail_transport {
        MailTransport::Relay {
            server,
            username,
            password,
        } => Arc::new(
            SmtpEmailSender::new(server, username, password, &config.email_from)
                .map_err(anyhow::Error::msg)
                .context("Failed to configure SMTP relay")?,
        ),
        MailTransport::Local { host, port } => {
            Arc::new(SmtpEmailSender::new_local(host, *port, &config.email_from))
        }
        MailTransport::LogOnly => {
            tracing::warn!("No SMTP settings found, OTP emails will only be logged");
            Arc::new(LogEmailSender::new(config.expose_dev_otp))
        }
    };
    let otp_notifier = Arc::new(OtpEmailService::new(email_sender));

    // OTP
    let otp = OtpUseCases {
        issue: Arc::new(IssueOtpService::new(
            EmailVerificationRepositoryPostgres::new(Arc::clone(&db_arc)),
            otp_notifier,
            config.expose_dev_otp,
        )),
        verify: Arc::new(VerifyOtpService::new(
            EmailVerificationRepositoryPostgres::new(Arc::clone(&db_arc)),
        )),
    };

    // Rides
    let ride_query = RideQueryPostgres::new(Arc::clone(&db_arc));
    let ride = RideUseCases {
        create: Arc::new(CreateRideService::new(RideRepositoryPostgres::new(
            Arc::clone(&db_arc),
        ))),
        search: Arc::new(SearchRidesService::new(ride_query.clone())),
        quote: Arc::new(QuoteFareService::new(
            ride_query.clone(),
            FarePolicy::default(),
        )),
    };

    // Driver verification
    let role_query: Arc<dyn RoleQuery + Send + Sync> =
        Arc::new(RoleQueryPostgres::new(Arc::clone(&db_arc)));
    let admin_guard = AdminGuard::new(role_query);
    let verification_repo = DriverVerificationRepositoryPostgres::new(Arc::clone(&db_arc));
    let driver_verification = DriverVerificationUseCases {
        submit: Arc::new(SubmitVerificationService::new(verification_repo.clone())),
        list: Arc::new(ListVerificationsService::new(
            verification_repo.clone(),
            admin_guard.clone(),
        )),
        review: Arc::new(ReviewVerificationService::new(
            verification_repo,
            admin_guard,
        )),
    };

    // Ratings
    let create_rating_use_case = Arc::new(CreateRatingService::new(
        RatingRepositoryPostgres::new(Arc::clone(&db_arc)),
        ride_query,
    ));

    let state = AppState {
        otp,
        ride,
        driver_verification,
        create_rating_use_case,
    };

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(JwtTokenService::new(jwt_config));
    let db_for_server = Arc::clone(&db_arc);
    let openapi = ApiDoc::openapi();

    let server_url = config.server_url();
    info!(server_url = %server_url, "Server listening");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .wrap(cors_headers())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
            .default_service(web::to(preflight_or_not_found))
    })
    .bind(&server_url)
    .with_context(|| format!("Failed to bind {}", server_url))?
    .run()
    .await
    .context("HTTP server terminated with an error")
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // OTP
    cfg.service(crate::otp::adapter::incoming::web::routes::send_otp_handler);
    cfg.service(crate::otp::adapter::incoming::web::routes::verify_otp_handler);
    // Rides
    cfg.service(crate::ride::adapter::incoming::web::routes::create_ride_handler);
    cfg.service(crate::ride::adapter::incoming::web::routes::search_rides_handler);
    cfg.service(crate::ride::adapter::incoming::web::routes::quote_fare_handler);
    // Driver verification
    cfg.service(crate::driver_verification::adapter::incoming::web::routes::submit_verification_handler);
    cfg.service(crate::driver_verification::adapter::incoming::web::routes::list_verifications_handler);
    cfg.service(crate::driver_verification::adapter::incoming::web::routes::verify_driver_handler);
    cfg.service(
        crate::driver_verification::adapter::incoming::web::routes::reject_verification_handler,
    );
    // Ratings
    cfg.service(crate::rating::adapter::incoming::web::routes::create_rating_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        tracing::error!("Error starting app: {e:#}");
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
