use std::sync::Arc;

use anyhow::Context;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use log::info;

use cinelog::api::routes::{build_router, AppState};
use cinelog::application::services::{MovieService, RatingService};
use cinelog::config::Config;
use cinelog::domain::repositories::{
    DirectorRepository, GenreRepository, MovieRepository, RatingRepository,
};
use cinelog::infrastructure::database::repositories::{
    DirectorRepositoryImpl, GenreRepositoryImpl, MovieRepositoryImpl, RatingRepositoryImpl,
};
use cinelog::infrastructure::database::Database;
use cinelog::shared::logger::init_logger;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_logger();

    let config = Config::from_env().context("invalid configuration")?;

    let database = Arc::new(Database::new(&config.database_url)?);

    {
        let mut conn = database.get_connection()?;
        conn.run_pending_migrations(MIGRATIONS)
            .map_err(|e| anyhow::anyhow!("Failed to run database migrations: {}", e))?;
        info!("Database migrations completed successfully");
    }

    let movie_repo: Arc<dyn MovieRepository> =
        Arc::new(MovieRepositoryImpl::new(Arc::clone(&database)));
    let director_repo: Arc<dyn DirectorRepository> =
        Arc::new(DirectorRepositoryImpl::new(Arc::clone(&database)));
    let genre_repo: Arc<dyn GenreRepository> =
        Arc::new(GenreRepositoryImpl::new(Arc::clone(&database)));
    let rating_repo: Arc<dyn RatingRepository> =
        Arc::new(RatingRepositoryImpl::new(Arc::clone(&database)));

    let state = AppState {
        movie_service: Arc::new(MovieService::new(
            Arc::clone(&movie_repo),
            director_repo,
            genre_repo,
        )),
        rating_service: Arc::new(RatingService::new(rating_repo, movie_repo)),
    };

    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
